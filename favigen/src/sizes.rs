//! `sizes`
//!
//! The fixed tables of icon sizes and the file names they are written under.

use std::fmt::Display;

/// A square icon to produce: its edge length and the file it is saved as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconSize {
    /// Width and height of the icon, in pixels.
    pub size: u32,
    /// File name relative to the output directory.
    pub file_name: &'static str,
}

impl IconSize {
    /// Creates a table entry.
    const fn new(size: u32, file_name: &'static str) -> Self {
        Self { size, file_name }
    }
}

/// Browser tab and bookmark icons.
pub const FAVICON_SIZES: [IconSize; 3] = [
    IconSize::new(32, "favicon-32x32.png"),
    IconSize::new(192, "favicon-192x192.png"),
    IconSize::new(512, "favicon-512x512.png"),
];

/// Icons iOS uses when the page is added to the home screen.
pub const APPLE_TOUCH_SIZES: [IconSize; 4] = [
    IconSize::new(120, "apple-touch-icon-120x120.png"),
    IconSize::new(152, "apple-touch-icon-152x152.png"),
    IconSize::new(167, "apple-touch-icon-167x167.png"),
    IconSize::new(180, "apple-touch-icon-180x180.png"),
];

/// Launcher icons for Android home screens.
pub const ANDROID_SIZES: [IconSize; 6] = [
    IconSize::new(48, "android-icon-48x48.png"),
    IconSize::new(72, "android-icon-72x72.png"),
    IconSize::new(96, "android-icon-96x96.png"),
    IconSize::new(144, "android-icon-144x144.png"),
    IconSize::new(192, "android-icon-192x192.png"),
    IconSize::new(512, "android-icon-512x512.png"),
];

/// One of the groups of PNG icons that gets generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSet {
    /// See [`FAVICON_SIZES`].
    Favicon,
    /// See [`APPLE_TOUCH_SIZES`].
    AppleTouch,
    /// See [`ANDROID_SIZES`].
    Android,
}

impl IconSet {
    /// Every set, in the order they are generated.
    pub const ALL: [IconSet; 3] = [IconSet::Favicon, IconSet::AppleTouch, IconSet::Android];

    /// Gets the size table for this set.
    ///
    /// # Returns
    /// The entries of the set, in generation order.
    #[must_use]
    pub fn sizes(self) -> &'static [IconSize] {
        match self {
            IconSet::Favicon => &FAVICON_SIZES,
            IconSet::AppleTouch => &APPLE_TOUCH_SIZES,
            IconSet::Android => &ANDROID_SIZES,
        }
    }
}

impl Display for IconSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconSet::Favicon => write!(f, "favicons"),
            IconSet::AppleTouch => write!(f, "Apple touch icons"),
            IconSet::Android => write!(f, "Android icons"),
        }
    }
}
