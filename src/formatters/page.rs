//! Page-level view models shared by the askama page and the static export shell.

use crate::dashboard::view_models::DashboardView;
use crate::formatters::html::HtmlFormatter;

pub const PAGE_TITLE: &str = "DealCast Control Surface";
pub const PAGE_SUBTITLE: &str =
    "Control room ready view of prospects, signals, and scripted actions.";

/// One `<option>` of a selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub selected: bool,
}

/// A rendered region ready to drop into a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionView {
    pub id: &'static str,
    pub html: String,
}

pub fn select_options<'a>(
    keys: impl Iterator<Item = &'a str>,
    selected: &str,
) -> Vec<SelectOption> {
    keys.map(|key| SelectOption {
        value: key.to_string(),
        selected: key == selected,
    })
    .collect()
}

/// Inner markup of every region, split into (left column, right column).
pub fn region_columns(view: &DashboardView) -> (Vec<RegionView>, Vec<RegionView>) {
    view.regions()
        .into_iter()
        .map(|(id, fragment)| {
            (
                id.in_left_column(),
                RegionView {
                    id: id.dom_id(),
                    html: HtmlFormatter::format(fragment),
                },
            )
        })
        .fold((Vec::new(), Vec::new()), |(mut left, mut right), (is_left, region)| {
            if is_left {
                left.push(region);
            } else {
                right.push(region);
            }
            (left, right)
        })
}

/// The ten regions as out-of-band swap targets, for htmx partial responses.
pub fn oob_regions(view: &DashboardView) -> String {
    view.regions()
        .into_iter()
        .map(|(id, fragment)| HtmlFormatter::format_region(id, fragment, true))
        .collect::<Vec<_>>()
        .join("\n")
}
