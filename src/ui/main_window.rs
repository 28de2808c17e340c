use fltk::{
    app::Sender,
    browser::HoldBrowser,
    button::{Button, CheckButton, RadioButton},
    enums::{Align, CallbackTrigger, Color, FrameType},
    frame::Frame,
    group::{Flex, FlexType, Scroll},
    input::{Input, MultilineInput},
    menu::{Choice, MenuBar},
    misc::{HelpView, InputChoice},
    prelude::*,
    window::Window,
};

use crate::app::controllers::notification::Severity;
use crate::app::domain::{FormField, IncludeFlag, Message, PreviewMode, TemplateType};

const ROW: i32 = 28;
const TALL_ROW: i32 = 70;
const FORM_WIDTH: i32 = 420;

/// Single-line and multi-line text inputs, one per `FormField`.
pub enum FieldInput {
    Line(Input),
    Multi(MultilineInput),
}

impl FieldInput {
    pub fn set_value(&mut self, value: &str) {
        match self {
            Self::Line(i) => i.set_value(value),
            Self::Multi(i) => i.set_value(value),
        }
    }

    pub fn set_colors(&mut self, background: Color, text: Color, selection: Color) {
        match self {
            Self::Line(i) => {
                i.set_color(background);
                i.set_text_color(text);
                i.set_selection_color(selection);
            }
            Self::Multi(i) => {
                i.set_color(background);
                i.set_text_color(text);
                i.set_selection_color(selection);
            }
        }
    }
}

pub struct MainWidgets {
    pub wind: Window,
    pub root: Flex,
    pub menu: MenuBar,
    pub fields: Vec<(FormField, FieldInput)>,
    pub template_choice: Choice,
    pub license_choice: Choice,
    pub flags: Vec<(IncludeFlag, CheckButton)>,
    pub tech_input: InputChoice,
    pub tag_list: HoldBrowser,
    pub generate_btn: Button,
    pub loading_frame: Frame,
    pub notification_banner: Frame,
    pub rendered_tab: RadioButton,
    pub raw_tab: RadioButton,
    pub preview: HelpView,
    pub actions: Flex,
}

fn labelled(flex: &mut Flex, label: &str) {
    let frame = Frame::default().with_label(label).with_align(Align::Left | Align::Inside);
    flex.fixed(&frame, 20);
}

fn line_input(flex: &mut Flex, sender: Sender<Message>, field: FormField) -> FieldInput {
    labelled(flex, field.label());
    let mut input = Input::default();
    flex.fixed(&input, ROW);
    input.set_trigger(CallbackTrigger::Changed);
    input.set_callback(move |i| sender.send(Message::FieldChanged(field, i.value())));
    FieldInput::Line(input)
}

fn multi_input(flex: &mut Flex, sender: Sender<Message>, field: FormField) -> FieldInput {
    labelled(flex, field.label());
    let mut input = MultilineInput::default();
    flex.fixed(&input, TALL_ROW);
    input.set_trigger(CallbackTrigger::Changed);
    input.set_callback(move |i| sender.send(Message::FieldChanged(field, i.value())));
    FieldInput::Multi(input)
}

/// Escape characters fltk treats specially in menu item labels.
pub fn menu_label(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('/', "\\/")
        .replace('&', "&&")
        .replace('|', "\\|")
}

fn build_form(sender: Sender<Message>) -> (Scroll, FormWidgets) {
    let scroll = Scroll::default().with_size(FORM_WIDTH, 0);
    let mut col = Flex::default().with_size(FORM_WIDTH - 20, 1400).column();
    col.set_margin(8);
    col.set_pad(4);

    let mut fields = Vec::new();
    fields.push((FormField::ProjectName, line_input(&mut col, sender, FormField::ProjectName)));
    fields.push((FormField::Tagline, line_input(&mut col, sender, FormField::Tagline)));
    fields.push((FormField::Description, multi_input(&mut col, sender, FormField::Description)));

    labelled(&mut col, "Template");
    let mut template_choice = Choice::default();
    col.fixed(&template_choice, ROW);
    for template in TemplateType::all() {
        template_choice.add_choice(template.display_name());
    }
    template_choice.set_callback(move |c| {
        let selected = usize::try_from(c.value())
            .ok()
            .and_then(|i| TemplateType::all().get(i).copied());
        sender.send(Message::TemplateSelected(selected));
    });

    labelled(&mut col, "Technologies (Enter to add, double-click to remove)");
    let mut tech_input = InputChoice::default();
    col.fixed(&tech_input, ROW);
    tech_input.set_trigger(CallbackTrigger::EnterKeyAlways);
    tech_input.set_callback(move |c| {
        if let Some(text) = c.value() {
            sender.send(Message::TechnologyEntered(text));
        }
    });

    let mut tag_list = HoldBrowser::default();
    col.fixed(&tag_list, 90);
    tag_list.set_callback(move |b| {
        if fltk::app::event_clicks() && b.value() > 0 {
            sender.send(Message::TechnologyRemoved((b.value() - 1) as usize));
        }
    });

    for field in [FormField::Features, FormField::Installation, FormField::Usage] {
        fields.push((field, multi_input(&mut col, sender, field)));
    }
    for field in [FormField::RepositoryUrl, FormField::DemoUrl] {
        fields.push((field, line_input(&mut col, sender, field)));
    }

    labelled(&mut col, FormField::License.label());
    let mut license_choice = Choice::default();
    col.fixed(&license_choice, ROW);
    license_choice.set_callback(move |c| {
        if let Some(license) = c.choice() {
            sender.send(Message::FieldChanged(FormField::License, license));
        }
    });

    fields.push((FormField::Author, line_input(&mut col, sender, FormField::Author)));
    fields.push((FormField::CustomSections, multi_input(&mut col, sender, FormField::CustomSections)));

    let mut flags = Vec::new();
    for flag in IncludeFlag::all().iter().copied() {
        let mut check = CheckButton::default().with_label(flag.label());
        col.fixed(&check, 24);
        check.set_callback(move |c| sender.send(Message::FlagToggled(flag, c.is_checked())));
        flags.push((flag, check));
    }

    col.end();
    scroll.end();

    (
        scroll,
        FormWidgets {
            fields,
            template_choice,
            license_choice,
            flags,
            tech_input,
            tag_list,
        },
    )
}

struct FormWidgets {
    fields: Vec<(FormField, FieldInput)>,
    template_choice: Choice,
    license_choice: Choice,
    flags: Vec<(IncludeFlag, CheckButton)>,
    tech_input: InputChoice,
    tag_list: HoldBrowser,
}

pub fn build_main_window(sender: Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, 1100, 760, "ReadmeForge");
    wind.set_xclass("ReadmeForge");

    let mut root = Flex::new(0, 0, 1100, 760, None);
    root.set_type(FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, 30, "");
    root.fixed(&menu, 30);

    // Notification banner (initially hidden)
    let mut notification_banner = Frame::default().with_size(0, 0);
    notification_banner.set_frame(FrameType::FlatBox);
    notification_banner.set_label_size(13);
    notification_banner.hide();
    root.fixed(&notification_banner, 0);

    let mut body = Flex::default().row();
    let (scroll, form) = build_form(sender);
    body.fixed(&scroll, FORM_WIDTH);

    let mut right = Flex::default().column();
    right.set_margin(8);

    let mut controls = Flex::default().row();
    let mut generate_btn = Button::default().with_label("Generate README");
    generate_btn.set_callback(move |_| sender.send(Message::Generate));
    controls.fixed(&generate_btn, 160);
    let mut loading_frame = Frame::default();
    loading_frame.hide();
    let mut rendered_tab = RadioButton::default().with_label(PreviewMode::Rendered.label());
    rendered_tab.set_callback(move |_| sender.send(Message::PreviewModeSelected(PreviewMode::Rendered)));
    controls.fixed(&rendered_tab, 90);
    let mut raw_tab = RadioButton::default().with_label(PreviewMode::Raw.label());
    raw_tab.set_callback(move |_| sender.send(Message::PreviewModeSelected(PreviewMode::Raw)));
    controls.fixed(&raw_tab, 90);
    controls.end();
    right.fixed(&controls, 32);

    let preview = HelpView::default();

    let mut actions = Flex::default().row();
    let mut copy_btn = Button::default().with_label("Copy");
    copy_btn.set_callback(move |_| sender.send(Message::CopyDocument));
    let mut download_btn = Button::default().with_label("Download");
    download_btn.set_callback(move |_| {
        if let Some(path) = super::file_dialogs::native_save_dialog("Markdown", "*.md") {
            sender.send(Message::DownloadDocument(path));
        }
    });
    let mut export_btn = Button::default().with_label("Export to GitHub...");
    export_btn.set_callback(move |_| sender.send(Message::OpenExportDialog));
    actions.end();
    actions.hide();
    right.fixed(&actions, 32);

    right.end();
    body.end();
    root.end();
    wind.resizable(&root);
    wind.end();

    let FormWidgets {
        fields,
        template_choice,
        license_choice,
        flags,
        tech_input,
        tag_list,
    } = form;

    MainWidgets {
        wind,
        root,
        menu,
        fields,
        template_choice,
        license_choice,
        flags,
        tech_input,
        tag_list,
        generate_btn,
        loading_frame,
        notification_banner,
        rendered_tab,
        raw_tab,
        preview,
        actions,
    }
}

/// Banner colors per severity: (background, text).
pub fn banner_colors(severity: Severity, is_dark: bool) -> (Color, Color) {
    match (severity, is_dark) {
        (Severity::Success, false) => (Color::from_rgb(212, 237, 218), Color::from_rgb(21, 87, 36)),
        (Severity::Success, true) => (Color::from_rgb(30, 80, 45), Color::White),
        (Severity::Error, false) => (Color::from_rgb(248, 215, 218), Color::from_rgb(114, 28, 36)),
        (Severity::Error, true) => (Color::from_rgb(110, 30, 35), Color::White),
        (Severity::Warning, false) => (Color::from_rgb(255, 250, 205), Color::Black),
        (Severity::Warning, true) => (Color::from_rgb(139, 128, 0), Color::White),
    }
}
