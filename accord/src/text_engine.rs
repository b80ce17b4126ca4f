//! Text measurement backed by cosmic-text, with caching.
//!
//! Shaping is expensive and layout asks the same questions many times (stacks
//! probe every child at several widths), so results are kept in an LRU cache
//! keyed by text, font size, family and wrap width.

use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;
use std::sync::{Mutex, OnceLock, PoisonError};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};
use lru::LruCache;

use crate::layout::text::{LINE_HEIGHT_EM, TextMeasurer};
use crate::primitives::Size;

const DEFAULT_CAPACITY: usize = 1024;

/// Global font system (expensive to create, shared across measurers).
static FONT_SYSTEM: OnceLock<Mutex<FontSystem>> = OnceLock::new();

fn font_system() -> &'static Mutex<FontSystem> {
    FONT_SYSTEM.get_or_init(|| Mutex::new(FontSystem::new()))
}

/// Font family specification.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FontFamily {
    Monospace,
    #[default]
    SansSerif,
    Serif,
    Named(String),
}

impl FontFamily {
    fn to_cosmic(&self) -> Family<'_> {
        match self {
            FontFamily::Monospace => Family::Monospace,
            FontFamily::SansSerif => Family::SansSerif,
            FontFamily::Serif => Family::Serif,
            FontFamily::Named(name) => Family::Name(name),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CacheKey {
    text_hash: u64,
    font_size: u32,
    max_width: u32,
}

impl CacheKey {
    fn new(text: &str, font_size: f32, max_width: f32) -> Self {
        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        text.hash(&mut hasher);
        Self {
            text_hash: hasher.finish(),
            font_size: font_size.to_bits(),
            max_width: max_width.to_bits(),
        }
    }
}

/// [`TextMeasurer`] that shapes with real fonts.
pub struct CosmicTextMeasurer {
    family: FontFamily,
    cache: Mutex<LruCache<CacheKey, Size>>,
}

impl CosmicTextMeasurer {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = NonZeroUsize::new(capacity).unwrap_or(NonZeroUsize::MIN);
        Self {
            family: FontFamily::default(),
            cache: Mutex::new(LruCache::new(capacity)),
        }
    }

    /// Use `family` for every measurement. Clears cached results.
    pub fn family(mut self, family: FontFamily) -> Self {
        self.family = family;
        self.clear_cache();
        self
    }

    pub fn cache_len(&self) -> usize {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn clear_cache(&self) {
        self.cache.lock().unwrap_or_else(PoisonError::into_inner).clear();
    }

    fn shape_uncached(&self, text: &str, font_size: f32, max_width: f32) -> Size {
        let mut font_system = font_system().lock().unwrap_or_else(PoisonError::into_inner);

        let line_height = font_size * LINE_HEIGHT_EM;
        let mut buffer = Buffer::new(&mut font_system, Metrics::new(font_size, line_height));

        // f32::MAX means "no wrapping".
        let wrap = (max_width < f32::MAX).then_some(max_width);
        buffer.set_size(&mut font_system, wrap, None);
        buffer.set_text(&mut font_system, text, Attrs::new().family(self.family.to_cosmic()), Shaping::Advanced);
        buffer.shape_until_scroll(&mut font_system, false);

        let mut width: f32 = 0.0;
        let mut lines = 0usize;
        for run in buffer.layout_runs() {
            width = width.max(run.line_w);
            lines += 1;
        }

        Size::new(width.ceil(), lines.max(1) as f32 * line_height)
    }
}

impl Default for CosmicTextMeasurer {
    fn default() -> Self {
        Self::new()
    }
}

impl TextMeasurer for CosmicTextMeasurer {
    fn measure(&self, text: &str, font_size: f32, max: Size) -> Size {
        if text.is_empty() {
            return Size::ZERO;
        }

        let key = CacheKey::new(text, font_size, max.width);
        if let Some(size) = self.cache.lock().unwrap_or_else(PoisonError::into_inner).get(&key) {
            return *size;
        }

        let size = self.shape_uncached(text, font_size, max.width);
        tracing::trace!(text, font_size, ?size, "shaped text");
        self.cache.lock().unwrap_or_else(PoisonError::into_inner).put(key, size);
        size
    }
}
