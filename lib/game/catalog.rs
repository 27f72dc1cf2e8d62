use crate::game::{ParseShapeError, Shape};
use derive_more::{Deref, Display, Error};
use std::{str::FromStr, sync::Arc};

use proptest::{collection::vec, prelude::*};

/// The 21 standard pieces, one polyomino of each shape from sizes 1 through 5.
const STANDARD: &str = "\
*

**

***

**
*.

****

***
*..

***
.*.

**
**

**.
.**

*****

****
*...

****
.*..

***
**.

***
*.*

***
*..
*..

.**
**.
*..

.**
**.
.*.

.*.
***
.*.

***.
..**

***
.*.
.*.

*..
***
..*";

/// An immutable, ordered list of piece [`Shape`]s.
///
/// The position of a shape in the catalog is its piece number.
/// Clones share the same underlying storage.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Deref)]
pub struct Catalog(Arc<[Shape]>);

impl Arbitrary for Catalog {
    type Parameters = ();
    type Strategy = BoxedStrategy<Catalog>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        vec(any::<Shape>(), 1..=8)
            .prop_map(|shapes| Catalog(shapes.into()))
            .boxed()
    }
}

impl Default for Catalog {
    #[inline]
    fn default() -> Self {
        Catalog::standard()
    }
}

/// The reason why a [`Catalog`] could not be constructed.
#[derive(Debug, Display, Clone, Eq, PartialEq, Error)]
pub enum ParseCatalogError {
    #[display(fmt = "catalog has no pieces")]
    Empty,
    #[display(fmt = "failed to parse piece #{index}")]
    InvalidShape {
        index: usize,
        #[error(source)]
        reason: ParseShapeError,
    },
}

impl Catalog {
    /// Constructs a [`Catalog`] out of a non-empty list of shapes.
    pub fn new<I: IntoIterator<Item = Shape>>(shapes: I) -> Result<Self, ParseCatalogError> {
        let shapes: Arc<[Shape]> = shapes.into_iter().collect();

        if shapes.is_empty() {
            Err(ParseCatalogError::Empty)
        } else {
            Ok(Catalog(shapes))
        }
    }

    /// The standard set of 21 pieces.
    pub fn standard() -> Self {
        match STANDARD.parse() {
            Ok(catalog) => catalog,
            Err(e) => unreachable!("the standard catalog is well formed: {e}"),
        }
    }

    /// The total number of cells covered by all pieces.
    #[inline]
    pub fn area(&self) -> usize {
        self.iter().map(Shape::area).sum()
    }
}

/// Pieces are separated by one or more blank lines.
impl FromStr for Catalog {
    type Err = ParseCatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut blocks = Vec::new();
        let mut block = String::new();

        for line in s.lines().map(|l| l.trim_end_matches('\r')) {
            if line.is_empty() {
                if !block.is_empty() {
                    blocks.push(std::mem::take(&mut block));
                }
            } else {
                block.push_str(line);
                block.push('\n');
            }
        }

        if !block.is_empty() {
            blocks.push(block);
        }

        let shapes = blocks
            .iter()
            .enumerate()
            .map(|(index, b)| {
                b.parse()
                    .map_err(|reason| ParseCatalogError::InvalidShape { index, reason })
            })
            .collect::<Result<Vec<Shape>, _>>()?;

        Catalog::new(shapes)
    }
}
