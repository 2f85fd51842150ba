//! Lightbox state machine.
//!
//! The lightbox is either closed or open over a sequence of media with a
//! cursor. Transitions are pure; the overlay view renders whatever state the
//! reducer holds and performs the DOM side effects.

use std::rc::Rc;

use yew::prelude::*;

#[derive(Debug, Clone, PartialEq)]
pub enum Media {
    Image {
        src: AttrValue,
        alt: AttrValue,
        caption: Option<AttrValue>,
    },
    Video {
        src: AttrValue,
        label: AttrValue,
        caption: Option<AttrValue>,
    },
}

impl Media {
    pub fn image(src: &'static str, alt: &'static str) -> Self {
        Media::Image {
            src: AttrValue::Static(src),
            alt: AttrValue::Static(alt),
            caption: None,
        }
    }

    pub fn video(src: &'static str, label: &'static str) -> Self {
        Media::Video {
            src: AttrValue::Static(src),
            label: AttrValue::Static(label),
            caption: None,
        }
    }

    pub fn with_caption(mut self, text: &'static str) -> Self {
        match &mut self {
            Media::Image { caption, .. } | Media::Video { caption, .. } => {
                *caption = Some(AttrValue::Static(text));
            }
        }
        self
    }

    pub fn src(&self) -> &AttrValue {
        match self {
            Media::Image { src, .. } | Media::Video { src, .. } => src,
        }
    }

    /// Explicit caption, falling back to the alt text or accessible label.
    pub fn caption(&self) -> AttrValue {
        match self {
            Media::Image { caption, alt, .. } => non_empty(caption).unwrap_or_else(|| alt.clone()),
            Media::Video { caption, label, .. } => non_empty(caption).unwrap_or_else(|| label.clone()),
        }
    }

    pub fn is_video(&self) -> bool {
        matches!(self, Media::Video { .. })
    }
}

fn non_empty(caption: &Option<AttrValue>) -> Option<AttrValue> {
    caption.clone().filter(|text| !text.is_empty())
}

pub fn next_index(index: usize, len: usize) -> usize {
    (index + 1) % len
}

pub fn previous_index(index: usize, len: usize) -> usize {
    (index + len - 1) % len
}

#[derive(Debug, Clone, PartialEq)]
pub enum LightboxAction {
    Open { items: Rc<Vec<Media>>, index: usize },
    Next,
    Previous,
    Close,
}

/// What a key press means while the lightbox is open.
#[derive(Debug, Clone, PartialEq)]
pub enum KeyCommand {
    Dispatch(LightboxAction),
    /// Prevent the browser default and do nothing else.
    Suppress,
    Ignore,
}

pub fn key_command(key: &str) -> KeyCommand {
    match key {
        "Escape" => KeyCommand::Dispatch(LightboxAction::Close),
        "ArrowLeft" => KeyCommand::Dispatch(LightboxAction::Previous),
        "ArrowRight" => KeyCommand::Dispatch(LightboxAction::Next),
        "ArrowUp" | "ArrowDown" => KeyCommand::Suppress,
        _ => KeyCommand::Ignore,
    }
}

/// A click closes the lightbox only when it lands on the backdrop itself,
/// not on anything inside the content.
pub fn is_backdrop_click<T: PartialEq>(target: Option<&T>, backdrop: Option<&T>) -> bool {
    matches!((target, backdrop), (Some(target), Some(backdrop)) if target == backdrop)
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LightboxState {
    items: Rc<Vec<Media>>,
    index: usize,
    open: bool,
    video_surface: bool,
}

impl LightboxState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Item under the cursor. After closing this is the item that was shown
    /// last, used to hand focus back to its gallery tile.
    pub fn current(&self) -> Option<&Media> {
        self.items.get(self.index)
    }

    /// Item that `Next` would show, for preloading.
    pub fn upcoming(&self) -> Option<&Media> {
        if self.items.is_empty() {
            return None;
        }
        self.items.get(next_index(self.index, self.items.len()))
    }

    pub fn shows_navigation(&self) -> bool {
        self.items.len() > 1
    }

    /// The video surface is created the first time a video is shown and kept
    /// for the rest of the page's life.
    pub fn has_video_surface(&self) -> bool {
        self.video_surface
    }

    pub fn open(&self, items: Rc<Vec<Media>>, index: usize) -> Self {
        if index >= items.len() {
            return self.clone();
        }
        let video_surface = self.video_surface || items[index].is_video();
        Self {
            items,
            index,
            open: true,
            video_surface,
        }
    }

    pub fn next(&self) -> Self {
        self.step(next_index)
    }

    pub fn previous(&self) -> Self {
        self.step(previous_index)
    }

    fn step(&self, advance: fn(usize, usize) -> usize) -> Self {
        if !self.open || self.items.is_empty() {
            return self.clone();
        }
        let index = advance(self.index, self.items.len());
        Self {
            items: Rc::clone(&self.items),
            index,
            open: true,
            video_surface: self.video_surface || self.items[index].is_video(),
        }
    }

    pub fn close(&self) -> Self {
        Self {
            open: false,
            ..self.clone()
        }
    }

    pub fn apply(&self, action: LightboxAction) -> Self {
        match action {
            LightboxAction::Open { items, index } => self.open(items, index),
            LightboxAction::Next => self.next(),
            LightboxAction::Previous => self.previous(),
            LightboxAction::Close => self.close(),
        }
    }
}

impl Reducible for LightboxState {
    type Action = LightboxAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn gallery(n: usize) -> Rc<Vec<Media>> {
        let srcs = ["/g/0.jpg", "/g/1.jpg", "/g/2.mp4", "/g/3.jpg", "/g/4.jpg", "/g/5.jpg"];
        Rc::new(
            (0..n)
                .map(|i| {
                    if i == 2 {
                        Media::video(srcs[i], "Clinic tour").with_caption("Tour")
                    } else {
                        Media::image(srcs[i], "Waiting room")
                    }
                })
                .collect(),
        )
    }

    #[test]
    fn navigation_visible_only_with_two_or_more_items() {
        let closed = LightboxState::default();
        assert!(!closed.shows_navigation());
        let one = closed.open(gallery(1), 0);
        assert!(one.is_open());
        assert!(!one.shows_navigation());
        assert!(closed.open(gallery(2), 0).shows_navigation());
        assert!(closed.open(gallery(5), 4).shows_navigation());
    }

    #[test]
    fn opening_empty_or_out_of_range_is_a_noop() {
        let closed = LightboxState::default();
        assert_eq!(closed.open(gallery(0), 0), closed);
        assert_eq!(closed.open(gallery(3), 3), closed);
    }

    #[test]
    fn navigation_requires_open_state() {
        let state = LightboxState::default().open(gallery(3), 1).close();
        assert_eq!(state.next().index(), 1);
        assert_eq!(state.previous().index(), 1);
        assert!(!state.next().is_open());
    }

    #[test]
    fn wraps_at_both_ends() {
        let first = LightboxState::default().open(gallery(4), 0);
        assert_eq!(first.previous().index(), 3);
        let last = LightboxState::default().open(gallery(4), 3);
        assert_eq!(last.next().index(), 0);
    }

    #[test]
    fn caption_falls_back_to_alt_or_label() {
        assert_eq!(Media::image("/a.jpg", "Alt text").caption().as_str(), "Alt text");
        assert_eq!(Media::image("/a.jpg", "Alt").with_caption("Cap").caption().as_str(), "Cap");
        assert_eq!(Media::video("/v.mp4", "").caption().as_str(), "");
    }

    #[test]
    fn empty_caption_falls_back_to_alt() {
        let media = Media::image("/a.jpg", "Waiting room").with_caption("");
        assert_eq!(media.caption().as_str(), "Waiting room");
        let media = Media::video("/v.mp4", "Clinic tour").with_caption("");
        assert_eq!(media.caption().as_str(), "Clinic tour");
    }

    #[test]
    fn only_backdrop_clicks_close() {
        let backdrop = "overlay";
        assert!(is_backdrop_click(Some(&backdrop), Some(&backdrop)));
        assert!(!is_backdrop_click(Some(&"caption"), Some(&backdrop)));
        assert!(!is_backdrop_click(None, Some(&backdrop)));
        assert!(!is_backdrop_click(Some(&backdrop), None));
        assert!(!is_backdrop_click::<&str>(None, None));
    }

    #[test]
    fn video_surface_is_created_lazily_and_kept() {
        let state = LightboxState::default().open(gallery(5), 0);
        assert!(!state.has_video_surface());
        let state = state.next().next();
        assert!(state.current().unwrap().is_video());
        assert!(state.has_video_surface());
        let state = state.next().close();
        assert!(state.has_video_surface());
    }

    #[test]
    fn keyboard_mapping() {
        assert_eq!(key_command("Escape"), KeyCommand::Dispatch(LightboxAction::Close));
        assert_eq!(key_command("ArrowLeft"), KeyCommand::Dispatch(LightboxAction::Previous));
        assert_eq!(key_command("ArrowRight"), KeyCommand::Dispatch(LightboxAction::Next));
        assert_eq!(key_command("ArrowUp"), KeyCommand::Suppress);
        assert_eq!(key_command("ArrowDown"), KeyCommand::Suppress);
        assert_eq!(key_command("Enter"), KeyCommand::Ignore);
    }

    #[test]
    fn open_at_two_arrow_right_three_times_then_escape() {
        let items = gallery(5);
        let mut state = Rc::new(LightboxState::default());
        state = state.reduce(LightboxAction::Open { items: Rc::clone(&items), index: 2 });
        assert_eq!(state.current(), Some(&items[2]));
        assert_eq!(state.current().unwrap().caption().as_str(), "Tour");

        for _ in 0..3 {
            match key_command("ArrowRight") {
                KeyCommand::Dispatch(action) => state = state.reduce(action),
                other => panic!("unexpected {:?}", other),
            }
        }
        assert_eq!(state.index(), (2 + 3) % 5);
        assert_eq!(state.index(), 0);

        if let KeyCommand::Dispatch(action) = key_command("Escape") {
            state = state.reduce(action);
        }
        assert!(!state.is_open());
        assert_eq!(state.current().map(|m| m.src().as_str()), Some("/g/0.jpg"));
    }

    #[test]
    fn upcoming_is_the_next_item() {
        let state = LightboxState::default().open(gallery(3), 2);
        assert_eq!(state.upcoming().map(|m| m.src().as_str()), Some("/g/0.jpg"));
        assert!(LightboxState::default().upcoming().is_none());
    }

    proptest! {
        #[test]
        fn next_then_previous_round_trips(len in 1usize..6, start in 0usize..6) {
            let start = start % len;
            let state = LightboxState::default().open(gallery(len), start);
            prop_assert_eq!(state.next().previous().index(), start);
            prop_assert_eq!(state.previous().next().index(), start);
            prop_assert!(state.next().index() < len);
        }
    }
}
