//! Grid adapter and text rendering of restaurant cards.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::data::{ImageSize, Restaurant};

const MAX_STARS: usize = 5;
/// Narrowest cell that still fits the rating line.
pub const MIN_CELL_WIDTH: usize = 12;

/// Backing store of the grid.
pub struct RestaurantAdapter {
    restaurants: Vec<Restaurant>,
    image_base: String,
    image_size: ImageSize,
}

impl RestaurantAdapter {
    pub fn new(image_base: impl Into<String>, image_size: ImageSize) -> Self {
        Self {
            restaurants: Vec::new(),
            image_base: image_base.into(),
            image_size,
        }
    }

    pub fn len(&self) -> usize {
        self.restaurants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.restaurants.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Restaurant> {
        self.restaurants.get(position)
    }

    /// Cells are identified by position.
    pub fn item_id(&self, position: usize) -> usize {
        position
    }

    pub fn clear(&mut self) {
        self.restaurants.clear();
    }

    pub fn add_all(&mut self, restaurants: impl IntoIterator<Item = Restaurant>) {
        self.restaurants.extend(restaurants);
    }

    /// Swap the whole backing store for a fresh result list.
    pub fn replace(&mut self, restaurants: Vec<Restaurant>) {
        self.clear();
        self.add_all(restaurants);
        tracing::debug!("adapter now holds {} restaurants", self.len());
    }

    pub fn bind(&self, position: usize) -> Option<RestaurantCard> {
        let rest = self.get(position)?;
        Some(RestaurantCard {
            image_url: rest.picture_url(&self.image_base, self.image_size),
            name: rest.name.clone(),
            city: rest.city.clone(),
            stars: rest.stars(),
        })
    }
}

/// What one grid cell shows.
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantCard {
    pub image_url: String,
    pub name: String,
    pub city: String,
    pub stars: f64,
}

impl RestaurantCard {
    /// Columns the image line needs; it is never truncated.
    pub fn min_width(&self) -> usize {
        self.image_url.width()
    }

    /// Render as framed lines, each `width + 4` columns wide, with `width` widened to
    /// [`Self::min_width`] when needed.
    pub fn render(&self, width: usize) -> Vec<String> {
        let width = width.max(self.min_width());
        let rating = format!("{} {:.1}", star_bar(self.stars), self.stars);
        let body = [&self.image_url, &self.name, &self.city, &rating];

        let mut lines = Vec::with_capacity(body.len() + 2);
        lines.push(format!("┌{}┐", "─".repeat(width + 2)));
        for text in body {
            lines.push(format!("│ {} │", fit(text, width)));
        }
        lines.push(format!("└{}┘", "─".repeat(width + 2)));
        lines
    }
}

fn star_bar(stars: f64) -> String {
    let filled = (stars.round() as usize).min(MAX_STARS);
    format!("{}{}", "★".repeat(filled), "☆".repeat(MAX_STARS - filled))
}

/// Pad or truncate `text` to exactly `width` display columns.
fn fit(text: &str, width: usize) -> String {
    let mut out = String::with_capacity(width);
    let mut used = 0;

    if text.width() <= width {
        out.push_str(text);
        used = text.width();
    } else if width > 0 {
        for ch in text.chars() {
            let w = ch.width().unwrap_or(0);
            // keep one column for the ellipsis
            if used + w + 1 > width {
                break;
            }
            out.push(ch);
            used += w;
        }
        out.push('…');
        used += 1;
    }

    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

pub struct GridView {
    columns: usize,
    cell_width: usize,
}

impl GridView {
    pub fn new(columns: usize, cell_width: usize) -> Self {
        Self {
            columns: columns.max(1),
            cell_width: cell_width.max(MIN_CELL_WIDTH),
        }
    }

    pub fn render(&self, adapter: &RestaurantAdapter) -> String {
        let cards: Vec<RestaurantCard> = (0..adapter.len())
            .filter_map(|position| adapter.bind(position))
            .collect();
        // one shared width keeps columns aligned across rows
        let width = cards
            .iter()
            .map(RestaurantCard::min_width)
            .fold(self.cell_width, usize::max);
        let cards: Vec<Vec<String>> = cards.iter().map(|card| card.render(width)).collect();

        let mut out = String::new();
        for row in cards.chunks(self.columns) {
            let height = row.iter().map(Vec::len).max().unwrap_or(0);
            for line in 0..height {
                let joined = row
                    .iter()
                    .filter_map(|card| card.get(line).map(String::as_str))
                    .collect::<Vec<_>>()
                    .join(" ");
                out.push_str(&joined);
                out.push('\n');
            }
        }
        out
    }
}
