use console::Style;
use once_cell::sync::Lazy;

pub static INFO: Lazy<Style> = Lazy::new(|| Style::new().dim());
pub static SUCCESS: Lazy<Style> = Lazy::new(|| Style::new().green());
pub static WARNING: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static ERROR: Lazy<Style> = Lazy::new(|| Style::new().red());

pub static HEADING: Lazy<Style> = Lazy::new(|| Style::new().bold());
pub static KIND: Lazy<Style> = Lazy::new(|| Style::new().cyan());
pub static MUTED: Lazy<Style> = Lazy::new(|| Style::new().dim());
pub static DRAFT: Lazy<Style> = Lazy::new(|| Style::new().yellow());
pub static PUBLISHED: Lazy<Style> = Lazy::new(|| Style::new().green());
