use fltk::{enums::Color, prelude::*};

use super::dialogs::export::ExportDialog;
use super::main_window::MainWidgets;

pub fn apply_theme(widgets: &mut MainWidgets, dialog: &mut ExportDialog, is_dark: bool) {
    let (background, text, field, field_text, selection) = if is_dark {
        (
            Color::from_rgb(25, 25, 25),
            Color::from_rgb(220, 220, 220),
            Color::from_rgb(30, 30, 30),
            Color::from_rgb(220, 220, 220),
            Color::from_rgb(70, 70, 100),
        )
    } else {
        (
            Color::from_rgb(240, 240, 240),
            Color::Black,
            Color::White,
            Color::Black,
            Color::from_rgb(173, 216, 230),
        )
    };

    for window in [&mut widgets.wind, &mut dialog.window] {
        window.set_color(background);
        window.set_label_color(text);
    }

    if is_dark {
        widgets.menu.set_color(Color::from_rgb(35, 35, 35));
        widgets.menu.set_selection_color(Color::from_rgb(60, 60, 60)); // Hover color
    } else {
        widgets.menu.set_color(Color::from_rgb(240, 240, 240));
        widgets.menu.set_selection_color(Color::from_rgb(200, 200, 200)); // Hover color
    }
    widgets.menu.set_text_color(text);

    for (_, input) in widgets.fields.iter_mut() {
        input.set_colors(field, field_text, selection);
    }
    widgets.tag_list.set_color(field);
    widgets.tag_list.set_selection_color(selection);
    widgets.preview.set_color(field);
    widgets.preview.set_text_color(field_text);
    widgets.loading_frame.set_label_color(text);
    for (_, check) in widgets.flags.iter_mut() {
        check.set_label_color(text);
    }

    widgets.wind.redraw();
    dialog.window.redraw();
}
