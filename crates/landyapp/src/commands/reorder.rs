use crate::commands::{helpers, CmdMessage, CmdResult};
use crate::error::{LandyError, Result};
use crate::model::{PageSpec, Section};
use crate::store::PageStore;
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

/// Rearrange a page's sections to match `new_order`.
///
/// The new order must be a complete permutation of the current section ids:
/// every section named exactly once, nothing missing, nothing foreign. Anything
/// else fails validation and the stored page keeps its old order.
pub fn run<S: PageStore>(store: &mut S, page_id: Uuid, new_order: &[Uuid]) -> Result<CmdResult> {
    let mut page = store.get(page_id)?;

    page.sections = apply_order(&page, new_order)?;
    let page = helpers::commit(store, page)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Sections reordered ({} sections)",
        page.sections.len()
    )));
    Ok(result.with_page(page))
}

/// Rebuild the section list in the requested order, or say precisely why not.
fn apply_order(page: &PageSpec, new_order: &[Uuid]) -> Result<Vec<Section>> {
    if new_order.len() != page.sections.len() {
        return Err(LandyError::Validation(format!(
            "Expected {} section ids, got {}",
            page.sections.len(),
            new_order.len()
        )));
    }

    let current_ids: HashSet<Uuid> = page.sections.iter().map(|s| s.id).collect();
    let mut remaining: HashMap<Uuid, Section> =
        page.sections.iter().map(|s| (s.id, s.clone())).collect();

    let mut reordered = Vec::with_capacity(new_order.len());
    for id in new_order {
        match remaining.remove(id) {
            Some(section) => reordered.push(section),
            None if current_ids.contains(id) => {
                return Err(LandyError::Validation(format!(
                    "Section id {id} appears more than once"
                )));
            }
            None => {
                return Err(LandyError::Validation(format!(
                    "Section id {id} is not part of this page"
                )));
            }
        }
    }

    Ok(reordered)
}
