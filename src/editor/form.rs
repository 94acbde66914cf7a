//! Editor form input
//!
//! `H` is whatever identifies an image on the current surface: a path on
//! disk for the CLI, a `web_sys::File` in the browser.

/// Input for one face: a text field and an optional image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceEdit<H> {
    pub text: String,
    pub image: Option<H>,
}

impl<H> Default for FaceEdit<H> {
    fn default() -> Self {
        Self {
            text: String::new(),
            image: None,
        }
    }
}

impl<H> FaceEdit<H> {
    pub fn new(text: impl Into<String>, image: Option<H>) -> Self {
        Self {
            text: text.into(),
            image,
        }
    }

    /// Neither text nor image given; the face will be left unchanged
    pub fn is_empty(&self) -> bool {
        self.image.is_none() && self.text.is_empty()
    }
}

/// Both faces of the editor form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorForm<H> {
    pub front: FaceEdit<H>,
    pub back: FaceEdit<H>,
}

impl<H> Default for EditorForm<H> {
    fn default() -> Self {
        Self {
            front: FaceEdit::default(),
            back: FaceEdit::default(),
        }
    }
}

impl<H> EditorForm<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: set front text
    pub fn front_text(mut self, text: impl Into<String>) -> Self {
        self.front.text = text.into();
        self
    }

    /// Builder method: set back text
    pub fn back_text(mut self, text: impl Into<String>) -> Self {
        self.back.text = text.into();
        self
    }

    /// Builder method: set front image
    pub fn front_image(mut self, image: H) -> Self {
        self.front.image = Some(image);
        self
    }

    /// Builder method: set back image
    pub fn back_image(mut self, image: H) -> Self {
        self.back.image = Some(image);
        self
    }

    /// Clear every field
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.front.is_empty() && self.back.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_and_reset() {
        let mut form: EditorForm<&str> = EditorForm::new().front_text("Hello").back_image("b.png");
        assert_eq!(form.front.text, "Hello");
        assert_eq!(form.back.image, Some("b.png"));
        assert!(!form.is_empty());

        form.reset();
        assert!(form.is_empty());
    }
}
