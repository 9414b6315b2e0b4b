// Gallery session: ordered image list plus a wrapping cursor.

use super::zoom::ZoomState;

/// State behind one open gallery modal. The image list and title are
/// fixed for the session; only the cursor moves.
#[derive(Debug, Clone, PartialEq)]
pub struct GallerySession {
    images: Vec<String>,
    title: String,
    current: usize,
}

impl GallerySession {
    /// Returns `None` for an empty image list; an empty gallery has
    /// nothing to show and callers should not open one.
    pub fn new(images: Vec<String>, title: impl Into<String>) -> Option<Self> {
        if images.is_empty() {
            return None;
        }
        Some(Self {
            images,
            title: title.into(),
            current: 0,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Navigation, counter and thumbnails are only rendered with more
    /// than one image.
    pub fn is_multi(&self) -> bool {
        self.images.len() > 1
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_image(&self) -> &str {
        &self.images[self.current]
    }

    /// Identity of one open request, used as a remount key. Two
    /// sessions sharing a title but showing different images must not
    /// be treated as the same open modal.
    pub fn identity(&self) -> String {
        format!("{}|{}", self.title, self.images.join("|"))
    }

    /// Counter text, 1-based: `"3 / 7"`.
    pub fn counter(&self) -> String {
        format!("{} / {}", self.current + 1, self.images.len())
    }

    /// Move the cursor, wrapping in both directions, and reset the zoom
    /// for the newly displayed image. The reset lives here so it happens
    /// exactly once per cursor move, no matter which input triggered it.
    pub fn go_to(&mut self, index: isize, zoom: &mut ZoomState) {
        let n = self.images.len() as isize;
        self.current = ((index % n + n) % n) as usize;
        zoom.reset();
    }

    pub fn next(&mut self, zoom: &mut ZoomState) {
        self.go_to(self.current as isize + 1, zoom);
    }

    pub fn prev(&mut self, zoom: &mut ZoomState) {
        self.go_to(self.current as isize - 1, zoom);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(n: usize) -> GallerySession {
        let images = (0..n).map(|i| format!("img{i}.jpg")).collect();
        GallerySession::new(images, "Test").unwrap()
    }

    #[test]
    fn empty_image_list_is_rejected() {
        assert!(GallerySession::new(Vec::new(), "Empty").is_none());
    }

    #[test]
    fn opens_at_first_image() {
        let s = session(3);
        assert_eq!(s.current_index(), 0);
        assert_eq!(s.current_image(), "img0.jpg");
        assert_eq!(s.counter(), "1 / 3");
    }

    #[test]
    fn wraps_backwards_from_first() {
        let mut s = session(3);
        let mut z = ZoomState::default();
        s.prev(&mut z);
        assert_eq!(s.current_index(), 2);
    }

    #[test]
    fn wraps_forwards_from_last() {
        let mut s = session(3);
        let mut z = ZoomState::default();
        s.go_to(2, &mut z);
        s.next(&mut z);
        assert_eq!(s.current_index(), 0);
    }

    #[test]
    fn go_to_wraps_arbitrary_indices() {
        let mut s = session(4);
        let mut z = ZoomState::default();
        s.go_to(-1, &mut z);
        assert_eq!(s.current_index(), 3);
        s.go_to(9, &mut z);
        assert_eq!(s.current_index(), 1);
    }

    #[test]
    fn cursor_move_resets_zoom() {
        let mut s = session(3);
        let mut z = ZoomState::default();
        z.zoom_in();
        z.drag_start(0.0, 0.0);
        z.drag_move(40.0, 40.0);
        s.next(&mut z);
        assert_eq!(z.scale, 1.0);
        assert_eq!((z.translate_x, z.translate_y), (0.0, 0.0));
    }

    #[test]
    fn single_image_hides_navigation() {
        let s = session(1);
        assert!(!s.is_multi());
        assert!(session(2).is_multi());
    }

    #[test]
    fn identity_distinguishes_same_titled_sessions() {
        let a = GallerySession::new(vec!["a.jpg".into()], "Trip").unwrap();
        let b = GallerySession::new(vec!["b.jpg".into()], "Trip").unwrap();
        assert_ne!(a.identity(), b.identity());
        assert_eq!(a.identity(), a.clone().identity());
    }

    #[test]
    fn counter_tracks_cursor() {
        let mut s = session(5);
        let mut z = ZoomState::default();
        s.go_to(4, &mut z);
        assert_eq!(s.counter(), "5 / 5");
    }
}
