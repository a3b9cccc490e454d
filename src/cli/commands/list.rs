//! Debug listing of a project's items

use gantt_export::core::ports::ProjectSource;
use gantt_export::core::services::NormalizeOptions;
use gantt_export::output::{ItemListing, OutputMode};

use super::{Target, emit};

/// Print every item with the fields the export would look at
pub fn list(
    source: &dyn ProjectSource,
    target: &Target<'_>,
    options: &NormalizeOptions,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let project = source.fetch_project(target.login, target.number)?;
    emit(&ItemListing::new(&project, options).render(mode))
}
