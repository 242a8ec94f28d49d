/// Handle to an object in a [`crate::Registry`] arena.
///
/// Handles are dense indices and are only meaningful for the registry that
/// issued them. They stay valid for the registry's lifetime, registered or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObjectId(pub(crate) u32);

impl ObjectId {
	/// The root namespace of every registry.
	pub const ROOT: ObjectId = ObjectId(0);

	/// Returns true if this is the root namespace handle.
	#[inline]
	pub fn is_root(self) -> bool {
		self == Self::ROOT
	}

	/// Returns the underlying u32 value.
	#[inline]
	pub fn as_u32(self) -> u32 {
		self.0
	}

	#[inline]
	pub(crate) fn index(self) -> usize {
		self.0 as usize
	}

	/// Handle for arena slot `index`, or `None` past `u32::MAX`.
	pub(crate) fn from_index(index: usize) -> Option<Self> {
		u32::try_from(index).ok().map(Self)
	}
}

impl std::fmt::Display for ObjectId {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		if self.is_root() {
			write!(f, "ObjectId(ROOT)")
		} else {
			write!(f, "ObjectId({})", self.0)
		}
	}
}
