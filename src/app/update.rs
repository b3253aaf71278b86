// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.

use super::Message;
use crate::ui::gallery::{self, Effect as GalleryEffect};
use crate::ui::video_modal::VideoModal;
use iced::Task;

/// Mutable state the update loop works on.
pub struct UpdateContext<'a> {
    pub gallery: &'a mut gallery::State,
    pub modal: &'a mut VideoModal,
    pub warning: &'a mut Option<String>,
}

pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Gallery(message) => handle_gallery_message(ctx, message),
        Message::Modal(message) => {
            ctx.modal.handle_message(message);
            Task::none()
        }
        Message::Playback { session, message } => {
            ctx.modal.handle_playback(session, message);
            Task::none()
        }
        Message::EscapePressed => {
            if ctx.modal.is_open() {
                ctx.modal.close();
            }
            Task::none()
        }
        Message::DismissWarning => {
            *ctx.warning = None;
            Task::none()
        }
    }
}

fn handle_gallery_message(ctx: &mut UpdateContext<'_>, message: gallery::Message) -> Task<Message> {
    let (effect, task) = ctx.gallery.handle_message(message);
    let task = task.map(Message::Gallery);

    match effect {
        GalleryEffect::None => {}
        GalleryEffect::OpenVideo(url) => {
            ctx.modal.open(url);
        }
        GalleryEffect::OpenExternal(url) => open_external(&url),
    }

    task
}

/// Opens a document or flipbook in the system browser as a fresh top-level
/// navigation.
fn open_external(url: &str) {
    tracing::info!(%url, "opening link");
    if let Err(err) = open::that_detached(url) {
        tracing::warn!(%url, error = %err, "failed to open link");
    }
}
