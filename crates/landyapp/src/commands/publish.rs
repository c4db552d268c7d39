use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::{LandyError, Result};
use crate::model::PageStatus;
use crate::store::PageStore;
use uuid::Uuid;

/// Mark a page as published.
///
/// A page with no sections cannot be published. Publishing an already
/// published page succeeds and still counts as a write (the version moves),
/// with a note that nothing actually changed.
pub fn run<S: PageStore>(store: &mut S, page_id: Uuid) -> Result<CmdResult> {
    let mut page = store.get(page_id)?;

    if page.sections.is_empty() {
        return Err(LandyError::Validation(
            "Cannot publish a page with no sections".to_string(),
        ));
    }

    let already_published = page.status == PageStatus::Published;
    page.status = PageStatus::Published;
    let page = helpers::commit(store, page)?;

    let mut result = CmdResult::default();
    if already_published {
        result.add_message(CmdMessage::info("Page was already published"));
    }
    result.add_message(CmdMessage::success(format!("Page published: {}", page.id)));
    Ok(result.with_page(page))
}
