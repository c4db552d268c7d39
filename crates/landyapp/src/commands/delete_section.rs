use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::{LandyError, Result};
use crate::store::PageStore;
use uuid::Uuid;

/// Remove one section from a page.
///
/// Removing the last section is allowed; the page stays around as an empty
/// draft shell. It cannot be published in that state, so the result carries a
/// heads-up alongside the usual confirmation.
pub fn run<S: PageStore>(store: &mut S, page_id: Uuid, section_id: Uuid) -> Result<CmdResult> {
    let mut page = store.get(page_id)?;

    let position = page
        .position_of(section_id)
        .ok_or(LandyError::SectionNotFound(section_id))?;
    let removed = page.sections.remove(position);
    let page = helpers::commit(store, page)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Section removed ({}): {}",
        removed.kind, removed.id
    )));
    if page.sections.is_empty() {
        result.add_message(CmdMessage::info(
            "Page has no sections left and cannot be published",
        ));
    }
    Ok(result.with_page(page))
}
