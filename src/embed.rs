use serde_json::{Map, Value};
use smol_str::SmolStr;
use timestamp::Timestamp;

use crate::{is_none_or_empty, Colour, Error, FieldList};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmbedType {
    #[default]
    Rich,
    Image,
    Video,
    Gifv,
    Article,
    Link,
    PollResult,
}

/// A rich attachment to a chat message: title, description, accent colour,
/// author/footer lines, media and a list of name/value fields.
///
/// Locally constructed embeds are always [`EmbedType::Rich`]; other types
/// only appear on embeds received from the API. All attributes are public,
/// but the chainable setters are the intended way to build one up:
///
/// ```
/// use embed_kit::Embed;
///
/// let mut embed = Embed::new();
/// embed.set_title("Release 1.4").add_field("Downloads", "412", true);
/// ```
///
/// The wire form is produced by [`to_map`](Embed::to_map) and parsed by
/// [`from_map`](Embed::from_map); unset or empty attributes never appear in
/// it. The same contract backs the `Serialize`/`Deserialize` impls, for
/// callers nesting embeds inside a larger message payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "typed-builder", derive(typed_builder::TypedBuilder))]
pub struct Embed {
    #[serde(default, skip_serializing_if = "is_none_or_empty")]
    #[cfg_attr(feature = "typed-builder", builder(default, setter(into)))]
    pub title: Option<SmolStr>,

    #[serde(default, skip_serializing_if = "is_none_or_empty")]
    #[cfg_attr(feature = "typed-builder", builder(default, setter(into)))]
    pub description: Option<SmolStr>,

    #[serde(default, skip_serializing_if = "is_none_or_empty")]
    #[cfg_attr(feature = "typed-builder", builder(default, setter(into)))]
    pub url: Option<SmolStr>,

    /// Accent colour; the wire key is the American spelling, but the
    /// British one is accepted on input.
    #[serde(
        rename = "color",
        alias = "colour",
        default,
        skip_serializing_if = "is_none_or_zero"
    )]
    #[cfg_attr(feature = "typed-builder", builder(default))]
    pub colour: Option<Colour>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[cfg_attr(feature = "typed-builder", builder(default))]
    pub timestamp: Option<Timestamp>,

    /// Kept when deserialized, never sent back out.
    #[serde(rename = "type", default, skip_serializing)]
    #[cfg_attr(feature = "typed-builder", builder(default))]
    pub ty: EmbedType,

    #[serde(default, skip_serializing_if = "EmbedAuthor::is_empty")]
    #[cfg_attr(feature = "typed-builder", builder(default))]
    pub author: EmbedAuthor,

    #[serde(default, skip_serializing_if = "EmbedFooter::is_empty")]
    #[cfg_attr(feature = "typed-builder", builder(default))]
    pub footer: EmbedFooter,

    #[serde(default, skip_serializing_if = "EmbedMedia::is_empty")]
    #[cfg_attr(feature = "typed-builder", builder(default))]
    pub image: EmbedMedia,

    #[serde(default, skip_serializing_if = "EmbedMedia::is_empty")]
    #[cfg_attr(feature = "typed-builder", builder(default))]
    pub thumbnail: EmbedMedia,

    #[serde(default, skip_serializing_if = "FieldList::is_empty")]
    #[cfg_attr(feature = "typed-builder", builder(default, setter(into)))]
    pub fields: FieldList<EmbedField>,
}

fn is_none_or_zero(colour: &Option<Colour>) -> bool {
    match colour {
        Some(colour) => colour.to_u32() == 0,
        None => true,
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedFooter {
    #[serde(default, skip_serializing_if = "is_none_or_empty")]
    pub text: Option<SmolStr>,

    #[serde(default, skip_serializing_if = "is_none_or_empty")]
    pub icon_url: Option<SmolStr>,
}

impl EmbedFooter {
    pub fn is_empty(&self) -> bool {
        is_none_or_empty(&self.text) && is_none_or_empty(&self.icon_url)
    }
}

/// `name` is optional here only because received embeds are trusted as-is;
/// [`Embed::set_author`] always writes it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedAuthor {
    #[serde(default, skip_serializing_if = "is_none_or_empty")]
    pub name: Option<SmolStr>,

    #[serde(default, skip_serializing_if = "is_none_or_empty")]
    pub url: Option<SmolStr>,

    #[serde(default, skip_serializing_if = "is_none_or_empty")]
    pub icon_url: Option<SmolStr>,
}

impl EmbedAuthor {
    pub fn is_empty(&self) -> bool {
        is_none_or_empty(&self.name) && is_none_or_empty(&self.url) && is_none_or_empty(&self.icon_url)
    }
}

/// Image or thumbnail reference. Both share one shape and one contract.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedMedia {
    #[serde(default, skip_serializing_if = "is_none_or_empty")]
    pub url: Option<SmolStr>,
}

impl EmbedMedia {
    pub fn is_empty(&self) -> bool {
        is_none_or_empty(&self.url)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmbedField {
    pub name: SmolStr,
    pub value: SmolStr,

    /// Always emitted on the wire, unlike every other embed attribute.
    #[serde(default)]
    pub inline: bool,
}

impl Embed {
    pub fn new() -> Embed {
        Embed::default()
    }

    pub fn set_title(&mut self, title: impl Into<SmolStr>) -> &mut Self {
        self.title = Some(title.into());
        self
    }

    pub fn set_description(&mut self, description: impl Into<SmolStr>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    pub fn set_url(&mut self, url: impl Into<SmolStr>) -> &mut Self {
        self.url = Some(url.into());
        self
    }

    pub fn set_timestamp(&mut self, timestamp: Option<Timestamp>) -> &mut Self {
        self.timestamp = timestamp;
        self
    }

    /// Sets the accent colour; `None` clears it.
    pub fn set_colour(&mut self, colour: Option<Colour>) -> &mut Self {
        self.colour = colour;
        self
    }

    /// Alias of [`set_colour`](Embed::set_colour).
    pub fn set_color(&mut self, color: Option<Colour>) -> &mut Self {
        self.set_colour(color)
    }

    /// Updates the footer. Each supplied non-empty argument overwrites its
    /// own key and leaves the other untouched; supplying neither clears the
    /// footer entirely.
    pub fn set_footer(&mut self, text: Option<&str>, icon_url: Option<&str>) -> &mut Self {
        let text = text.filter(|text| !text.is_empty());
        let icon_url = icon_url.filter(|icon_url| !icon_url.is_empty());

        if text.is_none() && icon_url.is_none() {
            self.footer = EmbedFooter::default();
        } else {
            if let Some(text) = text {
                self.footer.text = Some(SmolStr::new(text));
            }
            if let Some(icon_url) = icon_url {
                self.footer.icon_url = Some(SmolStr::new(icon_url));
            }
        }

        self
    }

    pub fn remove_footer(&mut self) -> &mut Self {
        self.footer = EmbedFooter::default();
        self
    }

    /// Sets the author line. `name` is always written; `url` and `icon_url`
    /// overwrite their keys only when supplied, keeping any prior values
    /// otherwise.
    pub fn set_author(&mut self, name: &str, url: Option<&str>, icon_url: Option<&str>) -> &mut Self {
        self.author.name = Some(SmolStr::new(name));

        if let Some(url) = url {
            self.author.url = Some(SmolStr::new(url));
        }
        if let Some(icon_url) = icon_url {
            self.author.icon_url = Some(SmolStr::new(icon_url));
        }

        self
    }

    pub fn remove_author(&mut self) -> &mut Self {
        self.author = EmbedAuthor::default();
        self
    }

    /// Sets or clears the full-size image. Unlike the footer and author,
    /// `None` replaces the whole structure rather than merging.
    pub fn set_image(&mut self, url: Option<&str>) -> &mut Self {
        match url {
            Some(url) => self.image.url = Some(SmolStr::new(url)),
            None => self.image = EmbedMedia::default(),
        }

        self
    }

    pub fn remove_image(&mut self) -> &mut Self {
        self.image = EmbedMedia::default();
        self
    }

    /// Same contract as [`set_image`](Embed::set_image).
    pub fn set_thumbnail(&mut self, url: Option<&str>) -> &mut Self {
        match url {
            Some(url) => self.thumbnail.url = Some(SmolStr::new(url)),
            None => self.thumbnail = EmbedMedia::default(),
        }

        self
    }

    pub fn remove_thumbnail(&mut self) -> &mut Self {
        self.thumbnail = EmbedMedia::default();
        self
    }

    /// Appends a field. Fields keep their insertion order; nothing is
    /// deduplicated or capped.
    pub fn add_field(
        &mut self,
        name: impl Into<SmolStr>,
        value: impl Into<SmolStr>,
        inline: bool,
    ) -> &mut Self {
        self.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline,
        });

        self
    }

    /// Removes the field at `index`, silently doing nothing when out of
    /// range.
    pub fn remove_field(&mut self, index: usize) -> &mut Self {
        if index < self.fields.len() {
            self.fields.remove(index);
        }

        self
    }

    /// Converts to the JSON-object shape the API expects. Unset attributes,
    /// empty strings, empty sub-structures and a zero colour are omitted
    /// rather than emitted as nulls; `type` is never emitted.
    pub fn to_map(&self) -> Result<Map<String, Value>, Error> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            // a struct with named fields always serializes as an object
            _ => unreachable!(),
        }
    }

    /// Builds an embed from a received JSON object. Missing keys fall back
    /// to their unset forms (`type` to `rich`), unknown keys are ignored,
    /// and wrong-typed values surface as [`Error::Json`].
    pub fn from_map(map: Map<String, Value>) -> Result<Embed, Error> {
        Ok(serde_json::from_value(Value::Object(map))?)
    }
}
