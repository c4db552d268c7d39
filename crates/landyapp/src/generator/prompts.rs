//! Prompt construction for page and section generation.
//!
//! The prompts spell out the exact JSON shape the model must return, one
//! entry per section kind, matching the schemas in [`super::schema`]. Crawl
//! signals, when present, are embedded as a brand-context block and promoted
//! to the primary style reference.

use crate::crawler::SiteSignals;
use crate::model::{GenerationContext, Section, SectionKind};

const CONTENT_GUIDELINES: &str = "\
## CONTENT GUIDELINES
- Headlines should be compelling and benefit-driven (5-8 words)
- Subheadlines should expand on the value proposition (1-2 sentences)
- Features should focus on benefits, not just feature names
- Testimonials should feel authentic and specific
- FAQs should address real objections and concerns
- CTAs should be action-oriented and clear

";

const PAGE_OUTPUT_FORMAT: &str = r#"## TECHNICAL REQUIREMENTS

Return ONLY valid JSON. No markdown code blocks, no explanatory text, just raw JSON.

Use this exact structure:

{
  "sections": [
    {
      "type": "hero",
      "content": {
        "headline": "string - powerful main headline (5-8 words, benefit-focused)",
        "subheadline": "string - supporting headline that expands the value prop (1-2 sentences)",
        "ctaText": "string - action button text (3-5 words)",
        "backgroundImage": "string - relevant stock image URL"
      }
    },
    {
      "type": "features",
      "content": {
        "title": "string - section headline",
        "items": [
          {"title": "string - feature name (2-4 words)", "description": "string - benefit-focused description (1 sentence)", "icon": "string - single relevant emoji"},
          {"title": "string", "description": "string", "icon": "string"},
          {"title": "string", "description": "string", "icon": "string"}
        ]
      }
    },
    {
      "type": "testimonials",
      "content": {
        "title": "string - section title",
        "items": [
          {"quote": "string - authentic testimonial (1-2 sentences, specific results)", "author": "string - realistic full name", "role": "string - job title"},
          {"quote": "string", "author": "string", "role": "string"}
        ]
      }
    },
    {
      "type": "faq",
      "content": {
        "title": "Frequently Asked Questions",
        "items": [
          {"question": "string - common objection or question (conversational style)", "answer": "string - clear, concise answer (1-2 sentences)"},
          {"question": "string", "answer": "string"},
          {"question": "string", "answer": "string"}
        ]
      }
    },
    {
      "type": "contact",
      "content": {
        "title": "string - compelling CTA headline",
        "subtitle": "string - supporting text that creates urgency (1-2 sentences)",
        "ctaText": "string - button text",
        "email": "string - contact email address"
      }
    },
    {
      "type": "footer",
      "content": {
        "companyName": "string - company or product name",
        "tagline": "string - one-line tagline",
        "links": [
          {"label": "Privacy Policy", "url": "/privacy"},
          {"label": "Terms of Service", "url": "/terms"}
        ]
      }
    }
  ]
}
"#;

const KEY_RULES: &str = "\
KEY RULES:
1. Create completely NEW content, not a slight variation of the current version
2. Keep the same JSON structure and field names
3. Maintain the brand tone and industry context
4. Keep appealing to the target audience
5. Do not reuse the exact same words and phrases as the current version

";

/// Full-page generation prompt.
pub(crate) fn page_prompt(context: &GenerationContext, signals: Option<&SiteSignals>) -> String {
    let mut prompt = String::from(
        "You are an expert landing page designer and copywriter. Generate a landing page \
         JSON specification that converts visitors into customers.\n\n",
    );

    prompt.push_str("## USER REQUIREMENTS\n");
    prompt.push_str(&format!("- Industry: {}\n", context.industry));
    prompt.push_str(&format!("- Offer/Product: {}\n", context.offer));
    prompt.push_str(&format!("- Target Audience: {}\n", context.target_audience));
    prompt.push_str(&format!("- Brand Tone: {}\n\n", context.brand_tone));

    match signals {
        Some(signals) => {
            prompt.push_str("## BRAND CONTEXT (Crawled from Website)\n");
            prompt.push_str(&signals.digest());
            prompt.push_str(
                "\nCRITICAL: Use the above brand context as your PRIMARY reference for tone of \
                 voice, vocabulary, brand personality, and positioning. The generated page should \
                 feel like a natural extension of the existing site; match the sophistication, \
                 formality, and emotional tone you observe.\n\n",
            );
        }
        None => {
            prompt.push_str(&format!(
                "Use a {} tone throughout all copy.\n\n",
                context.brand_tone
            ));
        }
    }

    prompt.push_str(CONTENT_GUIDELINES);
    prompt.push_str(PAGE_OUTPUT_FORMAT);
    prompt.push_str("\nGenerate the complete landing page JSON now:");
    prompt
}

/// Single-section regeneration prompt.
pub(crate) fn section_prompt(
    context: &GenerationContext,
    section: &Section,
    signals: Option<&SiteSignals>,
) -> String {
    let current = serde_json::to_string_pretty(&section.content).unwrap_or_default();

    let mut prompt = String::from(
        "You are an expert landing page designer. Regenerate a single landing page section.\n\n",
    );

    prompt.push_str("ORIGINAL USER CONTEXT:\n");
    prompt.push_str(&format!("- Industry: {}\n", context.industry));
    prompt.push_str(&format!("- Offer: {}\n", context.offer));
    prompt.push_str(&format!("- Target Audience: {}\n", context.target_audience));
    prompt.push_str(&format!("- Brand Tone: {}\n", context.brand_tone));

    if let Some(signals) = signals {
        prompt.push_str("\nBRAND CONTEXT FROM WEBSITE:\n");
        prompt.push_str(&signals.digest());
    }

    prompt.push_str(&format!(
        "\nCURRENT {} SECTION TO REPLACE:\n{}\n\n",
        section.kind.as_str().to_uppercase(),
        current
    ));

    prompt.push_str("REGENERATION INSTRUCTIONS:\n");
    prompt.push_str(kind_instructions(section.kind));
    prompt.push_str("\n\n");
    prompt.push_str(KEY_RULES);

    prompt.push_str(&format!(
        "Return ONLY valid JSON, no markdown, no code blocks, using this structure:\n\n\
         {{\n  \"type\": \"{}\",\n  \"content\": {{ ... your new content, same field names as the current version ... }}\n}}\n\n\
         Generate completely NEW and UNIQUE content now:",
        section.kind
    ));
    prompt
}

fn kind_instructions(kind: SectionKind) -> &'static str {
    match kind {
        SectionKind::Hero => {
            "For the HERO section, regenerate with:\n\
             - NEW headline (5-8 words, powerful, unique angle)\n\
             - NEW subheadline (1-2 sentences, different messaging)\n\
             - Same CTA button text OR a new CTA if it fits better\n\
             - NEW background image URL that fits the new angle"
        }
        SectionKind::Features => {
            "For the FEATURES section, regenerate with:\n\
             - NEW section title\n\
             - 3 NEW features highlighting different benefits than the current ones\n\
             - Keep emoji icons\n\
             - Focus on different value propositions"
        }
        SectionKind::Testimonials => {
            "For the TESTIMONIALS section, regenerate with:\n\
             - NEW section title\n\
             - NEW testimonials with different quotes and different personas\n\
             - NEW customer names and roles\n\
             - Different benefits highlighted than the current version"
        }
        SectionKind::Faq => {
            "For the FAQ section, regenerate with:\n\
             - NEW questions and answers than the current ones\n\
             - Address different concerns and use cases\n\
             - Keep answers to 1-2 sentences"
        }
        SectionKind::Contact => {
            "For the CONTACT section, regenerate with:\n\
             - NEW CTA headline and subtitle copy\n\
             - NEW button text if appropriate\n\
             - Keep the same contact email"
        }
        SectionKind::Footer => {
            "For the FOOTER section, regenerate with:\n\
             - Same link structure and URLs\n\
             - NEW tagline if applicable"
        }
    }
}
