use crate::constants::LOOKAHEAD_PAGES;
use smallvec::SmallVec;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Page {
    pub flipped: bool,
    pub z_index: i32,
    pub images_loaded: bool,
}

/// Flip state and stacking order for every page of the book.
///
/// Unflipped pages stack below flipped ones. Within the unflipped stack the
/// lowest index is nearest the viewer; within the flipped stack the highest
/// index (the most recently turned page) is.
#[derive(Clone, Debug)]
pub struct Flipbook {
    pages: Vec<Page>,
    last_page: Option<usize>,
}

impl Flipbook {
    pub fn new(page_count: usize, last_page: Option<usize>) -> Self {
        let mut book = Self {
            pages: vec![Page::default(); page_count],
            last_page: last_page.filter(|&i| i < page_count),
        };
        book.restack();
        book
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn page(&self, index: usize) -> Option<&Page> {
        self.pages.get(index)
    }

    pub fn last_page(&self) -> Option<usize> {
        self.last_page
    }

    pub fn is_last_page(&self, index: usize) -> bool {
        self.last_page == Some(index)
    }

    pub fn flipped(&self) -> Vec<bool> {
        self.pages.iter().map(|p| p.flipped).collect()
    }

    pub fn z_indices(&self) -> Vec<i32> {
        self.pages.iter().map(|p| p.z_index).collect()
    }

    /// Toggle a page and restack. Returns the new flipped state, or `None`
    /// for an out-of-range index.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let page = self.pages.get_mut(index)?;
        page.flipped = !page.flipped;
        let flipped = page.flipped;
        self.restack();
        Some(flipped)
    }

    pub fn restack(&mut self) {
        let unflipped = self.pages.iter().filter(|p| !p.flipped).count() as i32;
        let mut next_unflipped = unflipped;
        let mut next_flipped = unflipped + 1;
        for page in &mut self.pages {
            if page.flipped {
                page.z_index = next_flipped;
                next_flipped += 1;
            } else {
                page.z_index = next_unflipped;
                next_unflipped -= 1;
            }
        }
    }

    /// Latch the image-loaded flag. Returns `true` only on the first call for
    /// an in-range page, which is when the caller should reveal its images.
    pub fn lazy_load(&mut self, index: usize) -> bool {
        match self.pages.get_mut(index) {
            Some(page) if !page.images_loaded => {
                page.images_loaded = true;
                true
            }
            _ => false,
        }
    }

    /// Index of the page carrying `last_id`. Without such a page no page
    /// is treated as the last one.
    pub fn find_last_page<S: AsRef<str>>(page_ids: &[S], last_id: &str) -> Option<usize> {
        page_ids.iter().position(|id| id.as_ref() == last_id)
    }

    /// Pages following `index` whose images should be revealed ahead of time.
    /// May name indices past the end; `lazy_load` ignores those.
    #[inline]
    pub fn look_ahead(index: usize) -> SmallVec<[usize; LOOKAHEAD_PAGES]> {
        (1..=LOOKAHEAD_PAGES).map(|d| index.saturating_add(d)).collect()
    }
}
