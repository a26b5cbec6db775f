//! Asset identity types
//!
//! An asset is named by a 128-bit identifier plus a category tag. Together they
//! form the [`AssetIdentity`] that the cache manager turns into a file path.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{AssetError, AssetResult};

/// 128-bit asset identifier
///
/// Stored as a [`Uuid`] and always rendered in its lowercase hyphenated form,
/// which is also the form that ends up in cache file names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct AssetId(Uuid);

impl AssetId {
    /// The all-zero identifier
    pub const fn nil() -> Self {
        AssetId(Uuid::nil())
    }

    /// Generate a fresh random identifier
    pub fn new_random() -> Self {
        AssetId(Uuid::new_v4())
    }

    /// Parse an identifier from a hyphenated or simple hex string
    ///
    /// # Examples
    ///
    /// ```rust
    /// use asset_fs::app::AssetId;
    ///
    /// let id = AssetId::parse("5748DECC-F629-461C-9A36-A35A221FE21F")?;
    /// assert_eq!(id.to_string(), "5748decc-f629-461c-9a36-a35a221fe21f");
    /// # Ok::<(), asset_fs::errors::AssetError>(())
    /// ```
    pub fn parse(value: &str) -> AssetResult<Self> {
        Uuid::try_parse(value.trim())
            .map(AssetId)
            .map_err(|_| AssetError::InvalidId {
                value: value.to_string(),
            })
    }

    /// Create from raw bytes
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        AssetId(Uuid::from_bytes(bytes))
    }

    /// Get the raw byte array representation
    pub fn as_bytes(&self) -> &[u8; 16] {
        self.0.as_bytes()
    }

    /// Check whether this is the all-zero identifier
    pub fn is_nil(&self) -> bool {
        self.0.is_nil()
    }
}

impl From<Uuid> for AssetId {
    fn from(uuid: Uuid) -> Self {
        AssetId(uuid)
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for AssetId {
    type Err = AssetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for AssetId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for AssetId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(serde::de::Error::custom)
    }
}

/// Kind of cached asset
///
/// Every variant carries the numeric code used by the legacy asset protocol so
/// callers holding raw codes can convert with [`AssetCategory::from_code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetCategory {
    Texture,
    Sound,
    CallingCard,
    Landmark,
    Script,
    Clothing,
    Object,
    Notecard,
    Folder,
    LslText,
    LslBytecode,
    TextureTga,
    BodyPart,
    SoundWav,
    ImageTga,
    ImageJpeg,
    Animation,
    Gesture,
    SimState,
    Link,
    LinkFolder,
    Mesh,
    Settings,
    Material,
    Unknown,
}

impl AssetCategory {
    /// All categories in code order
    pub const ALL: [AssetCategory; 25] = [
        AssetCategory::Texture,
        AssetCategory::Sound,
        AssetCategory::CallingCard,
        AssetCategory::Landmark,
        AssetCategory::Script,
        AssetCategory::Clothing,
        AssetCategory::Object,
        AssetCategory::Notecard,
        AssetCategory::Folder,
        AssetCategory::LslText,
        AssetCategory::LslBytecode,
        AssetCategory::TextureTga,
        AssetCategory::BodyPart,
        AssetCategory::SoundWav,
        AssetCategory::ImageTga,
        AssetCategory::ImageJpeg,
        AssetCategory::Animation,
        AssetCategory::Gesture,
        AssetCategory::SimState,
        AssetCategory::Link,
        AssetCategory::LinkFolder,
        AssetCategory::Mesh,
        AssetCategory::Settings,
        AssetCategory::Material,
        AssetCategory::Unknown,
    ];

    /// Legacy numeric code
    pub const fn code(self) -> i8 {
        match self {
            AssetCategory::Texture => 0,
            AssetCategory::Sound => 1,
            AssetCategory::CallingCard => 2,
            AssetCategory::Landmark => 3,
            AssetCategory::Script => 4,
            AssetCategory::Clothing => 5,
            AssetCategory::Object => 6,
            AssetCategory::Notecard => 7,
            AssetCategory::Folder => 8,
            AssetCategory::LslText => 10,
            AssetCategory::LslBytecode => 11,
            AssetCategory::TextureTga => 12,
            AssetCategory::BodyPart => 13,
            AssetCategory::SoundWav => 17,
            AssetCategory::ImageTga => 18,
            AssetCategory::ImageJpeg => 19,
            AssetCategory::Animation => 20,
            AssetCategory::Gesture => 21,
            AssetCategory::SimState => 22,
            AssetCategory::Link => 24,
            AssetCategory::LinkFolder => 25,
            AssetCategory::Mesh => 49,
            AssetCategory::Settings => 56,
            AssetCategory::Material => 57,
            AssetCategory::Unknown => -1,
        }
    }

    /// Look up a category by its legacy numeric code
    pub fn from_code(code: i8) -> AssetResult<Self> {
        Self::ALL
            .into_iter()
            .find(|category| category.code() == code)
            .ok_or(AssetError::UnknownCategoryCode { code })
    }

    /// Stable lowercase name, used in file names and on the command line
    pub const fn name(self) -> &'static str {
        match self {
            AssetCategory::Texture => "texture",
            AssetCategory::Sound => "sound",
            AssetCategory::CallingCard => "calling-card",
            AssetCategory::Landmark => "landmark",
            AssetCategory::Script => "script",
            AssetCategory::Clothing => "clothing",
            AssetCategory::Object => "object",
            AssetCategory::Notecard => "notecard",
            AssetCategory::Folder => "folder",
            AssetCategory::LslText => "lsl-text",
            AssetCategory::LslBytecode => "lsl-bytecode",
            AssetCategory::TextureTga => "texture-tga",
            AssetCategory::BodyPart => "body-part",
            AssetCategory::SoundWav => "sound-wav",
            AssetCategory::ImageTga => "image-tga",
            AssetCategory::ImageJpeg => "image-jpeg",
            AssetCategory::Animation => "animation",
            AssetCategory::Gesture => "gesture",
            AssetCategory::SimState => "sim-state",
            AssetCategory::Link => "link",
            AssetCategory::LinkFolder => "link-folder",
            AssetCategory::Mesh => "mesh",
            AssetCategory::Settings => "settings",
            AssetCategory::Material => "material",
            AssetCategory::Unknown => "unknown",
        }
    }
}

impl fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AssetCategory {
    type Err = AssetError;

    /// Accepts the lowercase name in any case, with `_` or `-` separators,
    /// or the numeric code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        if let Ok(code) = normalized.parse::<i8>() {
            return Self::from_code(code);
        }
        Self::ALL
            .into_iter()
            .find(|category| category.name() == normalized)
            .ok_or_else(|| AssetError::UnknownCategory {
                name: s.to_string(),
            })
    }
}

impl Serialize for AssetCategory {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for AssetCategory {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        value.parse().map_err(serde::de::Error::custom)
    }
}

/// The (identifier, category) pair naming a cached asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssetIdentity {
    pub id: AssetId,
    pub category: AssetCategory,
}

impl AssetIdentity {
    pub fn new(id: AssetId, category: AssetCategory) -> Self {
        Self { id, category }
    }
}

impl fmt::Display for AssetIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.id, self.category)
    }
}
