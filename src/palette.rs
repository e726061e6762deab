use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::color::{pack_color, Color};
use crate::error::{RenderError, Result};
use crate::maze::Map;

/// Wall colors, indexed by the map digit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    /// `count` colors with every channel drawn from `0..255`.
    pub fn random(count: usize, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let colors = (0..count)
            .map(|_| {
                pack_color(
                    rng.gen_range(0..255),
                    rng.gen_range(0..255),
                    rng.gen_range(0..255),
                )
            })
            .collect();
        Self { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn resolve(&self, index: u8) -> Result<Color> {
        self.colors
            .get(index as usize)
            .copied()
            .ok_or(RenderError::PaletteIndex {
                index: index as usize,
                len: self.colors.len(),
            })
    }

    /// Fails on the first wall whose digit has no color.
    pub fn check_map(&self, map: &Map) -> Result<()> {
        match map.max_wall_index() {
            Some(index) => self.resolve(index).map(|_| ()),
            None => Ok(()),
        }
    }
}
