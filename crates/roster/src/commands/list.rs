//! `roster list`: one page of users through the same query path as the
//! viewer.

use tracing::debug;

use roster_core::{
    FetchParams, FilterSpec, PageInfo, SortOrder, SortSpec, UserDirectory, ViewState,
};

use crate::cli::{GlobalOpts, ListArgs};
use crate::config;
use crate::error::CliError;
use crate::output;

pub async fn handle(args: &ListArgs, global: &GlobalOpts) -> Result<(), CliError> {
    let mut cfg = config::resolve(global)?;
    if let Some(page_size) = args.page_size {
        cfg.api.page_size = page_size;
    }
    let viewer = cfg.to_viewer_config()?;
    let directory = UserDirectory::new(&viewer)?;

    let view = view_for(args);
    let params = FetchParams::derive(&view, viewer.page_size);
    debug!(?params, "listing users");

    let page = directory.fetch(&params).await?;
    let info = PageInfo::new(view.page_index, viewer.page_size, page.total);

    let rendered = output::render_page(
        global.output,
        &page,
        &info,
        output::should_color(global.color),
    )?;
    output::print_output(&rendered, global.quiet);
    Ok(())
}

/// The view state the viewer would be in after the same clicks and typing.
fn view_for(args: &ListArgs) -> ViewState {
    let order = if args.desc {
        SortOrder::Desc
    } else {
        SortOrder::Asc
    };
    ViewState {
        page_index: usize::try_from(args.page.saturating_sub(1)).unwrap_or(usize::MAX),
        sort: args
            .sort
            .map(|key| SortSpec::by(key, order))
            .unwrap_or_default(),
        filter: FilterSpec::new(args.filter_field, args.filter.clone()),
        ..ViewState::default()
    }
}
