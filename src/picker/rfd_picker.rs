// SPDX-License-Identifier: MPL-2.0
//! Native file dialog picker.

use super::{MediaKind, MediaPicker, PickFuture, PickOutcome};
use crate::i18n::fluent::I18n;
use crate::media::MediaReference;
use std::path::PathBuf;

/// Localized strings shown by the native dialog.
#[derive(Debug, Clone)]
pub struct DialogLabels {
    pub image_title: String,
    pub video_title: String,
    pub image_filter: String,
    pub video_filter: String,
}

impl DialogLabels {
    #[must_use]
    pub fn from_i18n(i18n: &I18n) -> Self {
        Self {
            image_title: i18n.tr("picker-image-title"),
            video_title: i18n.tr("picker-video-title"),
            image_filter: i18n.tr("picker-image-filter"),
            video_filter: i18n.tr("picker-video-filter"),
        }
    }

    fn for_kind(&self, kind: MediaKind) -> (&str, &str) {
        match kind {
            MediaKind::Image => (&self.image_title, &self.image_filter),
            MediaKind::Video => (&self.video_title, &self.video_filter),
        }
    }
}

/// [`MediaPicker`] backed by `rfd`'s asynchronous file dialog.
#[derive(Debug, Clone)]
pub struct RfdPicker {
    labels: DialogLabels,
    start_directory: Option<PathBuf>,
}

impl RfdPicker {
    #[must_use]
    pub fn new(labels: DialogLabels, start_directory: Option<PathBuf>) -> Self {
        Self {
            labels,
            start_directory,
        }
    }
}

impl MediaPicker for RfdPicker {
    fn pick(&self, kind: MediaKind) -> PickFuture {
        let (title, filter) = self.labels.for_kind(kind);
        let title = title.to_string();
        let filter = filter.to_string();
        let start_directory = self.start_directory.clone();

        Box::pin(async move {
            let mut dialog = rfd::AsyncFileDialog::new()
                .set_title(&title)
                .add_filter(&filter, kind.extensions());

            if let Some(dir) = start_directory {
                if dir.is_dir() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            // rfd hands back absolute paths, a failed conversion is treated
            // like a dismissed dialog.
            let picked = dialog
                .pick_file()
                .await
                .and_then(|handle| MediaReference::from_path(handle.path()).ok());
            PickOutcome::from(picked)
        })
    }
}
