// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Two screens share the window: the hero drop zone while no image is up,
//! and the comparison workspace afterwards. The toast overlay is stacked on
//! top of whichever is active.

use super::Message;
use crate::config::Config;
use crate::i18n::fluent::I18n;
use crate::session::{SessionStatus, UploadSession};
use crate::ui::compare;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::notifications::{self, Toast};
use crate::ui::styles;
use crate::ui::theme;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{button, container, text_input, Column, Container, Row, Stack, Text};
use iced::{Alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub config: &'a Config,
    pub session: &'a UploadSession,
    pub compare: &'a compare::State,
    pub notifications: &'a notifications::Manager,
    pub file_hovering: bool,
    pub spinner_rotation: f32,
}

/// Renders the window content for the current session state.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let screen: Element<'_, Message> = match ctx.session.status() {
        SessionStatus::Empty => view_hero(ctx.i18n, ctx.config, ctx.file_hovering),
        _ => view_workspace(
            ctx.i18n,
            ctx.session,
            ctx.compare,
            ctx.spinner_rotation,
        ),
    };

    let content = Column::new()
        .push(view_header(ctx.i18n))
        .push(
            Container::new(screen)
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill);

    Stack::new()
        .push(content)
        .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Thin brand bar shown on both screens.
fn view_header<'a>(i18n: &I18n) -> Element<'a, Message> {
    let brand = Text::new(i18n.tr("window-title")).size(typography::TITLE_SM);
    let tagline = Text::new(i18n.tr("app-tagline"))
        .size(typography::BODY_SM)
        .color(theme::muted_text_color());

    Container::new(
        Row::new()
            .spacing(spacing::SM)
            .align_y(Alignment::Center)
            .push(brand)
            .push(tagline),
    )
    .padding([spacing::XS, spacing::MD])
    .width(Length::Fill)
    .into()
}

/// Landing screen: title, drop zone, and supported-format hints.
fn view_hero<'a>(i18n: &I18n, config: &Config, file_hovering: bool) -> Element<'a, Message> {
    let max_mib = (config.max_upload_bytes() / (1024 * 1024)).to_string();

    let title = Text::new(i18n.tr("hero-title")).size(typography::TITLE_LG);
    let subtitle = Text::new(i18n.tr("hero-subtitle"))
        .size(typography::BODY_LG)
        .color(theme::muted_text_color());

    let open_button = button(Text::new(i18n.tr("dropzone-open-button")).size(typography::BODY_LG))
        .on_press(Message::OpenFileDialog)
        .style(styles::button::primary)
        .padding([spacing::SM, spacing::LG]);

    let hint = Text::new(i18n.tr("dropzone-hint"))
        .size(typography::BODY)
        .color(theme::muted_text_color());
    let formats = Text::new(i18n.tr_with_args("dropzone-formats", &[("max", max_mib.as_str())]))
        .size(typography::CAPTION)
        .color(theme::muted_text_color());

    let dropzone = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .align_x(Alignment::Center)
            .push(open_button)
            .push(hint)
            .push(formats),
    )
    .padding(spacing::XXL)
    .style(styles::container::dropzone(file_hovering));

    let footer = Text::new(i18n.tr("hero-footer"))
        .size(typography::CAPTION)
        .color(theme::muted_text_color());

    Container::new(
        Column::new()
            .spacing(spacing::LG)
            .align_x(Alignment::Center)
            .push(title)
            .push(subtitle)
            .push(dropzone)
            .push(footer),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Alignment::Center)
    .align_y(Alignment::Center)
    .into()
}

/// Workspace screen: comparison stage plus the settings sidebar.
fn view_workspace<'a>(
    i18n: &'a I18n,
    session: &'a UploadSession,
    compare_state: &'a compare::State,
    spinner_rotation: f32,
) -> Element<'a, Message> {
    Row::new()
        .push(view_stage(i18n, session, compare_state, spinner_rotation))
        .push(view_sidebar(i18n, session))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Comparison stage with the processing veil stacked on top while a call
/// is in flight.
fn view_stage<'a>(
    i18n: &'a I18n,
    session: &'a UploadSession,
    compare_state: &'a compare::State,
    spinner_rotation: f32,
) -> Element<'a, Message> {
    let Some(original) = session.original() else {
        // Unreachable outside Empty; keep the stage blank rather than panic.
        return Container::new(Text::new(""))
            .width(Length::Fill)
            .height(Length::Fill)
            .into();
    };

    let canvas = compare::view(
        original,
        session.processed(),
        compare_state,
        i18n.tr("preview-original-label"),
        i18n.tr("preview-cleaned-label"),
    )
    .map(Message::Compare);

    let content: Element<'a, Message> = if session.is_processing() {
        Stack::new()
            .push(canvas)
            .push(view_processing_overlay(i18n, spinner_rotation))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    } else {
        canvas
    };

    Container::new(content)
        .style(styles::container::stage)
        .padding(spacing::MD)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Translucent veil with the spinner and status line.
fn view_processing_overlay<'a>(i18n: &I18n, spinner_rotation: f32) -> Element<'a, Message> {
    let spinner = AnimatedSpinner::new(palette::PRIMARY_500, spinner_rotation).into_element();
    let status = Text::new(i18n.tr("processing-status"))
        .size(typography::BODY_LG)
        .color(palette::WHITE);

    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .align_x(Alignment::Center)
            .push(spinner)
            .push(status),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(Alignment::Center)
    .align_y(Alignment::Center)
    .style(|_theme| container::Style {
        background: Some(iced::Background::Color(theme::processing_veil_color())),
        ..container::Style::default()
    })
    .into()
}

/// Settings sidebar: instruction input and the session actions.
fn view_sidebar<'a>(i18n: &'a I18n, session: &'a UploadSession) -> Element<'a, Message> {
    let processing = session.is_processing();

    let title = Text::new(i18n.tr("sidebar-settings-title")).size(typography::TITLE_SM);

    let instruction_label =
        Text::new(i18n.tr("sidebar-instruction-label")).size(typography::BODY_SM);
    let placeholder = i18n.tr("sidebar-instruction-placeholder");
    let mut instruction_input = text_input(&placeholder, session.instruction())
        .padding(spacing::XS)
        .size(typography::BODY);
    if !processing {
        instruction_input = instruction_input.on_input(Message::InstructionChanged);
    }

    let mut column = Column::new()
        .spacing(spacing::MD)
        .push(title)
        .push(
            Column::new()
                .spacing(spacing::XXS)
                .push(instruction_label)
                .push(instruction_input),
        );

    if let Some(message) = session.error_message() {
        column = column.push(view_error_banner(i18n, message));
    }

    let process_key = if session.status() == SessionStatus::Error {
        "sidebar-retry-button"
    } else {
        "sidebar-process-button"
    };
    let can_process = matches!(
        session.status(),
        SessionStatus::Loaded | SessionStatus::Error
    );
    column = column.push(
        button(Text::new(i18n.tr(process_key)).size(typography::BODY))
            .on_press_maybe(can_process.then_some(Message::StartProcessing))
            .style(styles::button::primary)
            .padding(spacing::SM)
            .width(Length::Fill),
    );

    if session.status() == SessionStatus::Success {
        column = column.push(
            button(Text::new(i18n.tr("sidebar-save-button")).size(typography::BODY))
                .on_press(Message::SaveRequested)
                .style(styles::button::primary)
                .padding(spacing::SM)
                .width(Length::Fill),
        );
    }

    let reset_key = if processing {
        "sidebar-cancel-button"
    } else {
        "sidebar-reset-button"
    };
    column = column.push(
        button(Text::new(i18n.tr(reset_key)).size(typography::BODY))
            .on_press(Message::Reset)
            .style(styles::button::secondary)
            .padding(spacing::SM)
            .width(Length::Fill),
    );

    Container::new(column)
        .style(styles::container::panel)
        .padding(spacing::MD)
        .width(Length::Fixed(sizing::SIDEBAR_WIDTH))
        .height(Length::Fill)
        .into()
}

/// Failure text of the last call, shown verbatim under its title.
fn view_error_banner<'a>(i18n: &I18n, message: &str) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(i18n.tr("sidebar-error-title"))
                .size(typography::BODY_SM)
                .color(theme::error_text_color()),
        )
        .push(Text::new(message.to_string()).size(typography::BODY_SM))
        .into()
}
