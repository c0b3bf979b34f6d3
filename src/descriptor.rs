//! Channel layout metadata for pixel types.
//!
//! A [`ComponentDescriptor`] lists the channels of a pixel type in memory
//! order (role, bit width, numeric domain, bit offset). It is read-only
//! introspection data: nothing on the conversion path consults it.

use core::fmt;

/// Semantic meaning of a channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum ChannelRole {
    Red = 0,
    Green = 1,
    Blue = 2,
    Alpha = 3,
    Luminance = 4,
    /// Present in memory, carries no value. Excluded from equality.
    Padding = 5,
}

impl ChannelRole {
    /// One-letter tag used in format names (`R`, `G`, `B`, `A`, `L`, `X`).
    pub const fn letter(self) -> char {
        match self {
            Self::Red => 'R',
            Self::Green => 'G',
            Self::Blue => 'B',
            Self::Alpha => 'A',
            Self::Luminance => 'L',
            Self::Padding => 'X',
        }
    }
}

/// How a channel's bits are interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum ChannelDomain {
    /// Unsigned normalized integer: `0..=max` maps to `[0, 1]`.
    Unorm = 0,
    /// Signed normalized integer: `-max..=max` maps to `[-1, 1]`.
    Snorm = 1,
    /// Signed integer used at face value (full range maps to `[0, 1]` when scaled).
    Sint = 2,
    /// IEEE 754 binary32.
    Float = 3,
    /// IEEE 754 binary16.
    Half = 4,
    /// Unsigned normalized field narrower than a byte or not byte-aligned,
    /// packed with other fields into one integer.
    BitField = 5,
}

/// One channel of a pixel layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Component {
    pub role: ChannelRole,
    pub domain: ChannelDomain,
    /// Width in bits.
    pub bits: u8,
    /// Offset in bits from the start of the pixel (byte-addressed types) or
    /// from the least significant bit of the packed integer (bit-field types).
    pub offset: u8,
}

impl Component {
    pub const fn new(role: ChannelRole, domain: ChannelDomain, bits: u8, offset: u8) -> Self {
        Self {
            role,
            domain,
            bits,
            offset,
        }
    }

    /// Mask of this component within its packed integer, before shifting.
    #[inline]
    pub const fn mask(&self) -> u32 {
        crate::scale::max_value(self.bits as u32)
    }
}

/// Complete channel layout of one pixel type.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ComponentDescriptor {
    /// Channels in memory order (byte types) or from LSB upward (bit-field types).
    pub components: &'static [Component],
    /// Total packed size in bytes.
    pub size: u8,
}

impl ComponentDescriptor {
    pub const fn new(components: &'static [Component], size: u8) -> Self {
        Self { components, size }
    }

    /// Number of channels, including padding.
    #[inline]
    pub const fn channel_count(&self) -> usize {
        self.components.len()
    }

    /// Sum of all component widths. Equals `size * 8` for every type.
    pub const fn total_bits(&self) -> u32 {
        let mut sum = 0u32;
        let mut i = 0;
        while i < self.components.len() {
            sum += self.components[i].bits as u32;
            i += 1;
        }
        sum
    }

    /// Find the component playing `role`, if any.
    pub fn component(&self, role: ChannelRole) -> Option<&Component> {
        self.components.iter().find(|c| c.role == role)
    }

    pub fn has_alpha(&self) -> bool {
        self.component(ChannelRole::Alpha).is_some()
    }

    pub fn has_padding(&self) -> bool {
        self.component(ChannelRole::Padding).is_some()
    }

    /// Whether any channel is stored as a packed bit field.
    pub fn is_bit_field(&self) -> bool {
        self.components
            .iter()
            .any(|c| c.domain == ChannelDomain::BitField)
    }
}

impl fmt::Debug for ComponentDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ComponentDescriptor(")?;
        for (i, c) in self.components.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}{}:{:?}", c.role.letter(), c.bits, c.domain)?;
        }
        write!(f, "; {} bytes)", self.size)
    }
}

// ---------------------------------------------------------------------------
// Layout builders
// ---------------------------------------------------------------------------

/// Byte-aligned channels of equal width, in memory order.
pub(crate) const fn uniform<const N: usize>(
    roles: [ChannelRole; N],
    domain: ChannelDomain,
    bits: u8,
) -> [Component; N] {
    let mut out = [Component::new(ChannelRole::Padding, domain, bits, 0); N];
    let mut i = 0;
    while i < N {
        out[i] = Component::new(roles[i], domain, bits, (i as u8) * bits);
        i += 1;
    }
    out
}

/// Bit fields listed from the least significant bit upward.
pub(crate) const fn fields<const N: usize>(layout: [(ChannelRole, u8); N]) -> [Component; N] {
    let mut out = [Component::new(ChannelRole::Padding, ChannelDomain::BitField, 0, 0); N];
    let mut offset = 0u8;
    let mut i = 0;
    while i < N {
        out[i] = Component::new(layout[i].0, ChannelDomain::BitField, layout[i].1, offset);
        offset += layout[i].1;
        i += 1;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ChannelRole::*;

    #[test]
    fn uniform_offsets_follow_memory_order() {
        const C: [Component; 4] = uniform([Blue, Green, Red, Alpha], ChannelDomain::Unorm, 8);
        assert_eq!(C[0].offset, 0);
        assert_eq!(C[2].role, Red);
        assert_eq!(C[2].offset, 16);
        assert_eq!(C[3].offset, 24);
    }

    #[test]
    fn fields_accumulate_offsets() {
        const F: [Component; 3] = fields([(Blue, 5), (Green, 6), (Red, 5)]);
        assert_eq!(F[0].offset, 0);
        assert_eq!(F[1].offset, 5);
        assert_eq!(F[2].offset, 11);
        assert_eq!(F[1].mask(), 0x3F);
        static D: ComponentDescriptor = ComponentDescriptor::new(&F, 2);
        assert_eq!(D.total_bits(), 16);
        assert!(D.is_bit_field());
        assert!(!D.has_alpha());
    }

    #[test]
    fn debug_lists_channels() {
        static C: [Component; 2] = uniform([Luminance, Alpha], ChannelDomain::Unorm, 8);
        let d = ComponentDescriptor::new(&C, 2);
        let s = alloc::format!("{d:?}");
        assert!(s.contains("L8:Unorm"));
        assert!(s.contains("A8:Unorm"));
    }
}
