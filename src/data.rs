use std::fmt;
use std::str::FromStr;

/// A restaurant as shown in one grid cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub description: String,
    /// picture key on the image server
    pub picture_id: String,
    pub city: String,
    pub rating: f64,
}

impl Restaurant {
    /// Build the image URL for this restaurant: `{image_base}/{size}/{picture_id}`.
    pub fn picture_url(&self, image_base: &str, size: ImageSize) -> String {
        format!(
            "{}/{}/{}",
            image_base.trim_end_matches('/'),
            size,
            self.picture_id
        )
    }

    /// Rating clamped into the 0-5 star range.
    pub fn stars(&self) -> f64 {
        if self.rating.is_nan() {
            return 0.0;
        }
        self.rating.clamp(0.0, 5.0)
    }
}

impl fmt::Display for Restaurant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} ({}⭐)", self.name, self.city, self.rating)
    }
}

/// Size variants served under `images/`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageSize {
    #[default]
    Small,
    Medium,
    Large,
}

impl ImageSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

impl fmt::Display for ImageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown image size '{0}', expected one of: small, medium, large")]
pub struct ImageSizeParseError(String);

impl FromStr for ImageSize {
    type Err = ImageSizeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "small" => Ok(Self::Small),
            "medium" => Ok(Self::Medium),
            "large" => Ok(Self::Large),
            _ => Err(ImageSizeParseError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn melting_pot() -> Restaurant {
        Restaurant {
            id: "rqdv5juczeskfw1e867".to_string(),
            name: "Melting Pot".to_string(),
            description: "Lorem ipsum".to_string(),
            picture_id: "14".to_string(),
            city: "Medan".to_string(),
            rating: 4.2,
        }
    }

    #[test]
    fn test_picture_url_concatenates_size_and_id() {
        let rest = melting_pot();
        assert_eq!(
            rest.picture_url("https://restaurant-api.dicoding.dev/images", ImageSize::Medium),
            "https://restaurant-api.dicoding.dev/images/medium/14"
        );
        // trailing slash on the base is not doubled
        assert_eq!(
            rest.picture_url("http://localhost/images/", ImageSize::Small),
            "http://localhost/images/small/14"
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(melting_pot().to_string(), "Melting Pot - Medan (4.2⭐)");
    }

    #[test]
    fn test_stars_are_clamped() {
        let mut rest = melting_pot();
        rest.rating = 7.5;
        assert_eq!(rest.stars(), 5.0);
        rest.rating = -1.0;
        assert_eq!(rest.stars(), 0.0);
        rest.rating = f64::NAN;
        assert_eq!(rest.stars(), 0.0);
    }

    #[test]
    fn test_image_size_parse() {
        assert_eq!("small".parse::<ImageSize>().unwrap(), ImageSize::Small);
        assert_eq!(" Large ".parse::<ImageSize>().unwrap(), ImageSize::Large);
        let err = "huge".parse::<ImageSize>().unwrap_err();
        assert!(err.to_string().contains("huge"));
    }
}
