use crate::media::MediaPayload;

/// One piece of a rendered prompt, in the order the template declares it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptSegment {
    Text(String),
    Media(MediaPayload),
}

/// The exact text and media sent to the generative backend for one
/// invocation. Adjacent text is merged, so text and media segments
/// alternate.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderedPrompt {
    segments: Vec<PromptSegment>,
}

impl RenderedPrompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        if let Some(PromptSegment::Text(last)) = self.segments.last_mut() {
            last.push_str(text);
        } else {
            self.segments.push(PromptSegment::Text(text.to_string()));
        }
    }

    pub fn push_media(&mut self, media: MediaPayload) {
        self.segments.push(PromptSegment::Media(media));
    }

    pub fn segments(&self) -> &[PromptSegment] {
        &self.segments
    }

    /// All text segments concatenated, media omitted.
    pub fn text(&self) -> String {
        self.segments
            .iter()
            .filter_map(|s| match s {
                PromptSegment::Text(t) => Some(t.as_str()),
                PromptSegment::Media(_) => None,
            })
            .collect()
    }

    pub fn media(&self) -> impl Iterator<Item = &MediaPayload> {
        self.segments.iter().filter_map(|s| match s {
            PromptSegment::Media(m) => Some(m),
            PromptSegment::Text(_) => None,
        })
    }

    /// Character count of the text plus byte count of the media, for logs.
    pub fn size_hint(&self) -> (usize, usize) {
        self.segments.iter().fold((0, 0), |(chars, bytes), s| match s {
            PromptSegment::Text(t) => (chars + t.chars().count(), bytes),
            PromptSegment::Media(m) => (chars, bytes + m.bytes.len()),
        })
    }
}
