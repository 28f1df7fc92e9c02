// Sub-tabs of the settings page.
// Declares the page's identifiers, its settings type, and one renderer per sub-tab.

use std::rc::Rc;

use serde::{Deserialize, Serialize};
use subtabs::{Container, RenderContext, SubTab, SubTabRegistry, subtab_ids};
use tracing::warn;

subtab_ids! {
    /// Sub-tabs of the settings page.
    pub enum DemoTab {
        General => "general",
        Structure => "structure",
    }
}

/// Order in which folder contents are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Alphabetical,
    Modified,
    Created,
}

impl SortOrder {
    pub fn title(&self) -> &'static str {
        match self {
            SortOrder::Alphabetical => "Alphabetical",
            SortOrder::Modified => "Last modified",
            SortOrder::Created => "Created",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            SortOrder::Alphabetical => SortOrder::Modified,
            SortOrder::Modified => SortOrder::Created,
            SortOrder::Created => SortOrder::Alphabetical,
        }
    }
}

pub const MAX_FOLDER_DEPTH: u8 = 8;

/// Settings edited by the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoSettings {
    pub show_ribbon_icon: bool,
    pub confirm_deletes: bool,
    pub folder_depth: u8,
    pub sort_order: SortOrder,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            show_ribbon_icon: true,
            confirm_deletes: true,
            folder_depth: 3,
            sort_order: SortOrder::default(),
        }
    }
}

/// Build the page's registry. The `match` must cover every `DemoTab`.
pub fn registry() -> SubTabRegistry<DemoSettings, DemoTab> {
    SubTabRegistry::from_fn(|id| match id {
        DemoTab::General => Box::new(GeneralTab),
        DemoTab::Structure => Box::new(StructureTab),
    })
}

pub struct GeneralTab;

impl SubTab<DemoSettings> for GeneralTab {
    fn header(&self) -> &str {
        "General"
    }

    fn render(&self, ctx: &RenderContext<'_, DemoSettings>) {
        let settings = ctx.settings().borrow().clone();

        setting(
            ctx,
            "Show ribbon icon",
            on_off(settings.show_ribbon_icon),
            "Toggle",
            |s| s.show_ribbon_icon = !s.show_ribbon_icon,
        );
        setting(
            ctx,
            "Confirm before deleting",
            on_off(settings.confirm_deletes),
            "Toggle",
            |s| s.confirm_deletes = !s.confirm_deletes,
        );
    }
}

pub struct StructureTab;

impl SubTab<DemoSettings> for StructureTab {
    fn header(&self) -> &str {
        "Structure"
    }

    fn render(&self, ctx: &RenderContext<'_, DemoSettings>) {
        let settings = ctx.settings().borrow().clone();

        let depth = setting(
            ctx,
            "Folder depth",
            settings.folder_depth.to_string(),
            "Deeper",
            |s| s.folder_depth = s.folder_depth.saturating_add(1).min(MAX_FOLDER_DEPTH),
        );
        control(ctx, &depth, "Shallower", |s| {
            s.folder_depth = s.folder_depth.saturating_sub(1).max(1)
        });

        setting(
            ctx,
            "Sort order",
            settings.sort_order.title().to_string(),
            "Cycle",
            |s| s.sort_order = s.sort_order.next(),
        );
    }
}

fn on_off(value: bool) -> String {
    let text = if value { "on" } else { "off" };
    text.to_string()
}

/// Render a labeled setting row with one control that edits the settings.
fn setting<C, F>(
    ctx: &RenderContext<'_, DemoSettings, C>,
    label: &str,
    value: String,
    action: &str,
    apply: F,
) -> C
where
    C: Container,
    F: Fn(&mut DemoSettings) + 'static,
{
    let row = ctx.container().create_div("setting-item");
    row.set_text(&format!("{}: {}", label, value));
    control(ctx, &row, action, apply);
    row
}

/// Add a control to `row` that applies `apply` and saves in the background.
fn control<C, F>(ctx: &RenderContext<'_, DemoSettings, C>, row: &C, action: &str, apply: F)
where
    C: Container,
    F: Fn(&mut DemoSettings) + 'static,
{
    let button = row.create_button(action);
    let settings = Rc::clone(ctx.settings());
    let plugin = Rc::clone(ctx.plugin());

    button.on_click(Box::new(move || {
        apply(&mut settings.borrow_mut());
        let save = plugin.save_settings();
        tokio::task::spawn_local(async move {
            if let Err(err) = save.await {
                warn!(%err, "failed to save settings");
            }
        });
    }));
}
