// SPDX-License-Identifier: MPL-2.0
//! Inline modal playing one video over the gallery.
//!
//! The modal is either closed or open on a single reference. Each open
//! reference gets a fresh session id; the playback subscription is keyed by
//! it, so switching videos tears the previous decoder down instead of
//! reusing its buffered state.

use crate::error::VideoError;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::video_player::{
    time_units::format_clock, video_playback, DecoderCommand, DecoderCommandSender,
    PlaybackMessage, PlaybackState,
};
use iced::widget::image::Handle;
use iced::widget::{button, container, image, mouse_area, text, Column, Container, Row, Space, Stack};
use iced::{alignment, ContentFit, Element, Length, Subscription};
use std::sync::Arc;

/// Messages emitted by the modal.
#[derive(Debug, Clone)]
pub enum Message {
    /// Close button or backdrop click.
    Close,
    TogglePlayback,
    Restart,
    /// Click on the panel itself; swallowed so the backdrop does not close.
    ConsumeClick,
}

/// Playback session bound to one video reference.
#[derive(Debug)]
pub struct Session {
    url: String,
    id: u64,
    frame: Option<Handle>,
    playback: PlaybackState,
    duration_secs: Option<f64>,
    sender: Option<DecoderCommandSender>,
}

impl Session {
    fn new(url: String, id: u64) -> Self {
        Self {
            url,
            id,
            frame: None,
            playback: PlaybackState::default(),
            duration_secs: None,
            sender: None,
        }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    #[must_use]
    pub fn id(&self) -> u64 {
        self.id
    }

    #[must_use]
    pub fn playback(&self) -> &PlaybackState {
        &self.playback
    }

    #[must_use]
    pub fn has_frame(&self) -> bool {
        self.frame.is_some()
    }

    #[must_use]
    pub fn duration_secs(&self) -> Option<f64> {
        self.duration_secs
    }

    /// Asks the decoder to release its input right away.
    fn stop(&self) {
        if let Some(sender) = &self.sender {
            let _ = sender.send(DecoderCommand::Stop);
        }
    }

    fn send(&mut self, command: DecoderCommand) {
        let Some(sender) = &self.sender else {
            return;
        };
        if let Err(err) = sender.send(command) {
            tracing::warn!(url = %self.url, error = %err, "decoder command dropped");
            self.playback.on_error(err);
        }
    }
}

/// Video modal controller.
#[derive(Debug)]
pub struct VideoModal {
    session: Option<Session>,
    next_session_id: u64,
    autoplay: bool,
}

impl Default for VideoModal {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_VIDEO_AUTOPLAY)
    }
}

impl VideoModal {
    #[must_use]
    pub fn new(autoplay: bool) -> Self {
        Self {
            session: None,
            next_session_id: 0,
            autoplay,
        }
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Reference currently shown, if open.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.session.as_ref().map(Session::url)
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Opens `url`. Returns `false` when it is already the open reference.
    ///
    /// Any other reference replaces the current session entirely.
    pub fn open(&mut self, url: String) -> bool {
        if self.url() == Some(url.as_str()) {
            return false;
        }
        if let Some(previous) = self.session.take() {
            previous.stop();
        }
        self.next_session_id = self.next_session_id.wrapping_add(1);
        tracing::info!(%url, session = self.next_session_id, "opening video");
        self.session = Some(Session::new(url, self.next_session_id));
        true
    }

    pub fn close(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::debug!(url = %session.url, "closing video");
            session.stop();
        }
    }

    pub fn handle_message(&mut self, message: Message) {
        match message {
            Message::Close => self.close(),
            Message::TogglePlayback => {
                if let Some(session) = &mut self.session {
                    if let Some(command) = session.playback.toggle() {
                        session.send(command);
                    }
                }
            }
            Message::Restart => {
                if let Some(session) = &mut self.session {
                    for command in session.playback.restart() {
                        session.send(command);
                    }
                }
            }
            Message::ConsumeClick => {}
        }
    }

    /// Applies a decoder message. Messages from a replaced or closed session
    /// are ignored.
    pub fn handle_playback(&mut self, session_id: u64, message: PlaybackMessage) {
        let Some(session) = self.session.as_mut().filter(|s| s.id == session_id) else {
            tracing::trace!(session_id, "dropping playback message from stale session");
            return;
        };

        match message {
            PlaybackMessage::Started(sender) => {
                session.sender = Some(sender);
                if let Some(command) = session.playback.on_started(self.autoplay) {
                    session.send(command);
                }
            }
            PlaybackMessage::Opened { duration_secs } => {
                session.duration_secs = duration_secs;
            }
            PlaybackMessage::FrameReady {
                rgba_data,
                width,
                height,
                pts_secs,
            } => {
                let pixels = Arc::unwrap_or_clone(rgba_data);
                session.frame = Some(Handle::from_rgba(width, height, pixels));
                session.playback.on_frame(pts_secs);
            }
            PlaybackMessage::Buffering => {}
            PlaybackMessage::EndOfStream => session.playback.on_end_of_stream(),
            PlaybackMessage::Error(err) => session.playback.on_error(err),
        }
    }

    /// Decoder subscription for the open session.
    pub fn subscription(&self) -> Subscription<(u64, PlaybackMessage)> {
        match &self.session {
            Some(session) => video_playback(session.url.clone(), session.id),
            None => Subscription::none(),
        }
    }

    /// Backdrop plus panel, or `None` while closed.
    pub fn view<'a>(&'a self, i18n: &I18n) -> Option<Element<'a, Message>> {
        let session = self.session.as_ref()?;

        let backdrop = mouse_area(
            Container::new(Space::new())
                .width(Length::Fill)
                .height(Length::Fill)
                .style(styles::container::backdrop),
        )
        .on_press(Message::Close);

        let panel = mouse_area(
            Container::new(panel_content(session, i18n))
                .width(Length::Fixed(sizing::MODAL_WIDTH))
                .padding(spacing::MD)
                .style(styles::container::modal),
        )
        .on_press(Message::ConsumeClick);

        Some(
            Stack::new()
                .width(Length::Fill)
                .height(Length::Fill)
                .push(backdrop)
                .push(
                    Container::new(panel)
                        .width(Length::Fill)
                        .height(Length::Fill)
                        .align_x(alignment::Horizontal::Center)
                        .align_y(alignment::Vertical::Center),
                )
                .into(),
        )
    }
}

fn panel_content<'a>(session: &'a Session, i18n: &I18n) -> Element<'a, Message> {
    let close = button(text("\u{2715}").size(typography::BODY).center())
        .width(Length::Fixed(spacing::XL))
        .height(Length::Fixed(spacing::XL))
        .style(styles::button::close)
        .on_press(Message::Close);

    let header = Row::new()
        .push(Space::new().width(Length::Fill))
        .push(close);

    let surface_height = (sizing::MODAL_WIDTH - 2.0 * spacing::MD) * 9.0 / 16.0;
    let surface: Element<'a, Message> = match (&session.playback, &session.frame) {
        (PlaybackState::Error(err), _) => error_notice(err, i18n),
        (_, Some(frame)) => image(frame.clone())
            .content_fit(ContentFit::Contain)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        (_, None) => text(i18n.tr("video-loading"))
            .size(typography::BODY)
            .into(),
    };

    let surface = Container::new(surface)
        .width(Length::Fill)
        .height(Length::Fixed(surface_height))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    Column::new()
        .spacing(spacing::SM)
        .push(header)
        .push(surface)
        .push(transport(session, i18n))
        .into()
}

fn error_notice<'a>(err: &VideoError, i18n: &I18n) -> Element<'a, Message> {
    container(text(i18n.tr(err.i18n_key())).size(typography::BODY))
        .padding([spacing::SM, spacing::MD])
        .style(styles::container::error_notice)
        .into()
}

fn transport<'a>(session: &Session, i18n: &I18n) -> Element<'a, Message> {
    let playback = &session.playback;
    let enabled = playback.position().is_some();

    let toggle_label = if playback.is_playing() {
        i18n.tr("video-pause")
    } else {
        i18n.tr("video-play")
    };

    let toggle = button(text(toggle_label).size(typography::BODY))
        .padding([spacing::XXS, spacing::MD])
        .style(if enabled {
            styles::button::primary
        } else {
            styles::button::disabled
        })
        .on_press_maybe(enabled.then_some(Message::TogglePlayback));

    let restart = button(text(i18n.tr("video-restart")).size(typography::BODY))
        .padding([spacing::XXS, spacing::MD])
        .style(if enabled {
            styles::button::primary
        } else {
            styles::button::disabled
        })
        .on_press_maybe(enabled.then_some(Message::Restart));

    let elapsed = format_clock(playback.position().unwrap_or(0.0));
    let total = session
        .duration_secs
        .map_or_else(|| "--:--".to_string(), format_clock);

    Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(toggle)
        .push(restart)
        .push(Space::new().width(Length::Fill))
        .push(text(format!("{elapsed} / {total}")).size(typography::CAPTION))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn frame(pts_secs: f64) -> PlaybackMessage {
        PlaybackMessage::FrameReady {
            rgba_data: Arc::new(vec![0u8; 4]),
            width: 1,
            height: 1,
            pts_secs,
        }
    }

    #[test]
    fn starts_closed() {
        let modal = VideoModal::default();
        assert!(!modal.is_open());
        assert!(modal.url().is_none());
        assert!(modal.view(&I18n::new(None, &Config::default())).is_none());
    }

    #[test]
    fn switching_videos_starts_a_new_session() {
        let mut modal = VideoModal::new(true);
        assert!(modal.open("v1.mp4".into()));
        let first = modal.session().map(Session::id);
        modal.handle_playback(first.unwrap_or_default(), frame(1.0));
        assert!(modal.session().is_some_and(Session::has_frame));

        assert!(modal.open("v2.mp4".into()));
        let session = modal.session().expect("open");
        assert_eq!(session.url(), "v2.mp4");
        assert_ne!(Some(session.id()), first);
        assert!(!session.has_frame());
        assert_eq!(*session.playback(), PlaybackState::Loading);
    }

    #[test]
    fn reopening_the_same_video_is_a_no_op() {
        let mut modal = VideoModal::default();
        modal.open("v1.mp4".into());
        let id = modal.session().map(Session::id);
        assert!(!modal.open("v1.mp4".into()));
        assert_eq!(modal.session().map(Session::id), id);
    }

    #[test]
    fn close_and_backdrop_close_the_modal() {
        let mut modal = VideoModal::default();
        modal.open("v1.mp4".into());
        modal.handle_message(Message::ConsumeClick);
        assert!(modal.is_open());
        modal.handle_message(Message::Close);
        assert!(!modal.is_open());

        // A later open of the same reference starts over.
        assert!(modal.open("v1.mp4".into()));
    }

    #[test]
    fn stale_session_messages_are_ignored() {
        let mut modal = VideoModal::default();
        modal.open("v1.mp4".into());
        let old = modal.session().map(Session::id).unwrap_or_default();
        modal.open("v2.mp4".into());

        modal.handle_playback(old, frame(3.0));
        assert!(!modal.session().is_some_and(Session::has_frame));
    }

    #[test]
    fn autoplay_sends_play_on_start() {
        let mut modal = VideoModal::new(true);
        modal.open("v1.mp4".into());
        let id = modal.session().map(Session::id).unwrap_or_default();

        let (sender, mut rx) = DecoderCommandSender::detached();
        modal.handle_playback(id, PlaybackMessage::Started(sender));

        assert_eq!(rx.try_recv().ok(), Some(DecoderCommand::Play));
        assert!(modal.session().is_some_and(|s| s.playback().is_playing()));
    }

    #[test]
    fn transport_controls_forward_commands() {
        let mut modal = VideoModal::new(false);
        modal.open("v1.mp4".into());
        let id = modal.session().map(Session::id).unwrap_or_default();
        let (sender, mut rx) = DecoderCommandSender::detached();
        modal.handle_playback(id, PlaybackMessage::Started(sender));
        assert!(rx.try_recv().is_err());

        modal.handle_message(Message::TogglePlayback);
        assert_eq!(rx.try_recv().ok(), Some(DecoderCommand::Play));

        modal.handle_message(Message::Restart);
        assert_eq!(
            rx.try_recv().ok(),
            Some(DecoderCommand::Seek { target_secs: 0.0 })
        );
    }

    #[test]
    fn closing_stops_the_decoder() {
        let mut modal = VideoModal::new(false);
        modal.open("v1.mp4".into());
        let id = modal.session().map(Session::id).unwrap_or_default();
        let (sender, mut rx) = DecoderCommandSender::detached();
        modal.handle_playback(id, PlaybackMessage::Started(sender));

        modal.open("v2.mp4".into());
        assert_eq!(rx.try_recv().ok(), Some(DecoderCommand::Stop));
    }

    #[test]
    fn decoder_errors_are_kept_for_display() {
        let mut modal = VideoModal::default();
        modal.open("broken.mp4".into());
        let id = modal.session().map(Session::id).unwrap_or_default();
        modal.handle_playback(id, PlaybackMessage::Error(VideoError::NoVideoStream));

        assert_eq!(
            modal.session().and_then(|s| s.playback().error()),
            Some(&VideoError::NoVideoStream)
        );
    }

    #[test]
    fn dropped_decoder_surfaces_as_error() {
        let mut modal = VideoModal::new(false);
        modal.open("v1.mp4".into());
        let id = modal.session().map(Session::id).unwrap_or_default();
        let (sender, rx) = DecoderCommandSender::detached();
        modal.handle_playback(id, PlaybackMessage::Started(sender));
        drop(rx);

        modal.handle_message(Message::TogglePlayback);
        assert_eq!(
            modal.session().and_then(|s| s.playback().error()),
            Some(&VideoError::DecoderStopped)
        );
    }
}
