use ratatui::{style::Style, widgets::Block, Frame};

use crate::app::App;
use crate::logic::nav::{is_narrow, viewport_units};
use crate::storage::KvStore;
use crate::ui::layout::HitMap;

use super::{body, footer, header, layout, modal, nav, theme};

/// Main render function - orchestrates all UI rendering and refreshes the
/// mouse hit map as a side product of where things actually landed.
pub fn render<S: KvStore>(f: &mut Frame, app: &mut App<S>) {
    let size = f.area();
    app.model.ui.viewport_width = viewport_units(size.width);

    let palette = theme::palette(app.model.ui.theme);

    // Paint the themed background across the whole frame first
    f.render_widget(
        Block::default().style(Style::default().bg(palette.bg).fg(palette.fg)),
        size,
    );

    let layout_info = layout::calculate_layout(size);

    let header_hits = header::render_header(f, layout_info.header_area, &app.model, &palette);
    let body_hits = body::render_body(f, layout_info.body_area, app, &palette);
    footer::render_footer(f, layout_info.footer_area, &app.model, &palette);

    // The open panel replaces the header's inline links as the click target
    let mut nav_links = header_hits.links;
    if app.model.ui.nav_open && is_narrow(app.model.ui.viewport_width) {
        nav_links = nav::render_nav_panel(f, layout_info.body_area, &app.model, &palette);
    }

    let modal_hits = app
        .model
        .ui
        .modal
        .clone()
        .map(|state| modal::render_modal(f, size, &state, &palette));

    app.hit = HitMap {
        nav_toggle: header_hits.nav_toggle,
        theme_toggle: header_hits.theme_toggle,
        nav_links,
        gallery_items: body_hits.gallery_items,
        fields: body_hits.fields,
        submit: body_hits.submit,
        modal: modal_hits,
    };
}
