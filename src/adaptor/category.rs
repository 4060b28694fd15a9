//! Iterator categories and their compile-time tags
//!
//! A primitive names its category through an associated tag type. The tag
//! decides which operators the adaptor exposes:
//! - `Input`/`Forward`: increment, dereference, equality
//! - `Bidirectional`: adds decrement
//! - `RandomAccess`: adds offset arithmetic, distance, ordering

use std::fmt;

use super::Primitive;

/// Capability level of an adapted iterator.
///
/// Ordered by capability: `Input < Forward < Bidirectional < RandomAccess`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Category {
    /// Single pass, read on demand.
    Input,
    /// Multi pass, forward only.
    Forward,
    /// Forward and backward single steps.
    Bidirectional,
    /// Constant-time jumps, distance and ordering.
    RandomAccess,
}

impl Category {
    /// Resolve the category a primitive type declares.
    pub const fn of<P: Primitive>() -> Self {
        <P::Category as CategoryTag>::CATEGORY
    }

    /// Whether every operator of `other` is also available in `self`.
    pub fn includes(self, other: Category) -> bool {
        self >= other
    }

    /// Whether the category allows stepping backwards.
    pub fn is_bidirectional(self) -> bool {
        self.includes(Category::Bidirectional)
    }

    /// Whether the category allows offset arithmetic and ordering.
    pub fn is_random_access(self) -> bool {
        self == Category::RandomAccess
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Input => "input",
            Category::Forward => "forward",
            Category::Bidirectional => "bidirectional",
            Category::RandomAccess => "random-access",
        };
        f.write_str(name)
    }
}

/// Zero-sized marker naming a [`Category`] at the type level.
pub trait CategoryTag: Copy + Default + fmt::Debug + 'static {
    /// Runtime value of this tag.
    const CATEGORY: Category;
}

/// Tags whose operator surface includes multi-pass iteration.
pub trait AtLeastForward: CategoryTag {}

/// Tags whose operator surface includes decrement.
pub trait AtLeastBidirectional: AtLeastForward {}

/// Tags whose operator surface includes offset arithmetic and ordering.
pub trait AtLeastRandomAccess: AtLeastBidirectional {}

/// Tag for [`Category::Input`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct InputTag;

/// Tag for [`Category::Forward`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ForwardTag;

/// Tag for [`Category::Bidirectional`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BidirectionalTag;

/// Tag for [`Category::RandomAccess`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RandomAccessTag;

impl CategoryTag for InputTag {
    const CATEGORY: Category = Category::Input;
}

impl CategoryTag for ForwardTag {
    const CATEGORY: Category = Category::Forward;
}

impl CategoryTag for BidirectionalTag {
    const CATEGORY: Category = Category::Bidirectional;
}

impl CategoryTag for RandomAccessTag {
    const CATEGORY: Category = Category::RandomAccess;
}

impl AtLeastForward for ForwardTag {}
impl AtLeastForward for BidirectionalTag {}
impl AtLeastForward for RandomAccessTag {}

impl AtLeastBidirectional for BidirectionalTag {}
impl AtLeastBidirectional for RandomAccessTag {}

impl AtLeastRandomAccess for RandomAccessTag {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_are_ordered_by_capability() {
        assert!(Category::Input < Category::Forward);
        assert!(Category::Forward < Category::Bidirectional);
        assert!(Category::Bidirectional < Category::RandomAccess);
    }

    #[test]
    fn test_includes() {
        assert!(Category::RandomAccess.includes(Category::Input));
        assert!(Category::Bidirectional.includes(Category::Bidirectional));
        assert!(!Category::Forward.includes(Category::Bidirectional));
        assert!(Category::Bidirectional.is_bidirectional());
        assert!(!Category::Bidirectional.is_random_access());
    }

    #[test]
    fn test_tags_map_to_categories() {
        assert_eq!(InputTag::CATEGORY, Category::Input);
        assert_eq!(ForwardTag::CATEGORY, Category::Forward);
        assert_eq!(BidirectionalTag::CATEGORY, Category::Bidirectional);
        assert_eq!(RandomAccessTag::CATEGORY, Category::RandomAccess);
    }

    #[test]
    fn test_display() {
        assert_eq!(Category::RandomAccess.to_string(), "random-access");
        assert_eq!(Category::Input.to_string(), "input");
    }
}
