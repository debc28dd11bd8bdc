use crate::layout::TextOverflow;
use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum RenderError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsingError(#[from] owned_ttf_parser::FaceParsingError),

    #[error(transparent)]
    /// [image] failed to parse the image
    Image(#[from] image::ImageError),

    #[error("failed to read template: {0}")]
    /// [lopdf] failed to parse the template PDF
    Template(#[from] lopdf::Error),

    #[error("template PDF has no pages")]
    TemplateMissingPage,

    #[error("template PDF is malformed: {0}")]
    TemplateMalformed(&'static str),

    #[error("form has no slots to place it in")]
    /// A form listed no offsets, so there's nowhere on a page to put it
    NoSlots,

    #[error("page missing from document")]
    PageMissing,

    #[error("field `{field}` does not fit")]
    /// A field's text could not be set inside its box at any allowed size
    Field {
        field: &'static str,
        #[source]
        source: TextOverflow,
    },

    #[error("invalid configuration: {0}")]
    Config(#[from] toml::de::Error),
}

impl RenderError {
    /// Attach the name of the field that overflowed
    pub fn field(field: &'static str) -> impl FnOnce(TextOverflow) -> RenderError {
        move |source| RenderError::Field { field, source }
    }
}
