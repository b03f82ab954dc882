//! Chain identifiers and the registry backing the chain selector.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Chain identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChainId(pub u64);

impl ChainId {
	pub const ETHEREUM: Self = Self(1);
	pub const OPTIMISM: Self = Self(10);
	pub const POLYGON: Self = Self(137);
	pub const BASE: Self = Self(8453);
	pub const ARBITRUM: Self = Self(42161);
}

impl fmt::Display for ChainId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl FromStr for ChainId {
	type Err = std::num::ParseIntError;

	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		Ok(ChainId(s.parse()?))
	}
}

/// A chain the registry can resolve by numeric id or slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnownChain {
	/// Numeric chain identifier.
	pub id: ChainId,
	/// URL-friendly name, matched case-insensitively (e.g. "polygon").
	pub slug: String,
	/// Human-readable display name.
	pub name: String,
}

impl KnownChain {
	pub fn new(id: ChainId, slug: impl Into<String>, name: impl Into<String>) -> Self {
		Self {
			id,
			slug: slug.into(),
			name: name.into(),
		}
	}
}

/// Registry of chains selectable in the discovery form.
///
/// Seeded with the mainnets the dashboard ships with; configuration can
/// register additional entries. An entry registered with an existing id
/// replaces the earlier one.
#[derive(Debug, Clone, Default)]
pub struct ChainRegistry {
	chains: Vec<KnownChain>,
}

impl ChainRegistry {
	pub fn empty() -> Self {
		Self::default()
	}

	/// Registry preloaded with the built-in mainnets.
	pub fn with_defaults() -> Self {
		let mut registry = Self::empty();
		registry.register(KnownChain::new(ChainId::ETHEREUM, "ethereum", "Ethereum"));
		registry.register(KnownChain::new(ChainId::OPTIMISM, "optimism", "Optimism"));
		registry.register(KnownChain::new(ChainId::POLYGON, "polygon", "Polygon"));
		registry.register(KnownChain::new(ChainId::BASE, "base", "Base"));
		registry.register(KnownChain::new(ChainId::ARBITRUM, "arbitrum", "Arbitrum"));
		registry
	}

	pub fn register(&mut self, chain: KnownChain) {
		if let Some(existing) = self.chains.iter_mut().find(|c| c.id == chain.id) {
			*existing = chain;
		} else {
			self.chains.push(chain);
		}
	}

	pub fn contains(&self, id: ChainId) -> bool {
		self.chains.iter().any(|c| c.id == id)
	}

	pub fn get(&self, id: ChainId) -> Option<&KnownChain> {
		self.chains.iter().find(|c| c.id == id)
	}

	/// Resolves "137" or "polygon" to a registered chain id.
	pub fn resolve(&self, value: &str) -> Option<ChainId> {
		if let Ok(id) = value.parse::<ChainId>() {
			return self.contains(id).then_some(id);
		}
		self.chains
			.iter()
			.find(|c| c.slug.eq_ignore_ascii_case(value))
			.map(|c| c.id)
	}

	pub fn iter(&self) -> impl Iterator<Item = &KnownChain> {
		self.chains.iter()
	}

	pub fn len(&self) -> usize {
		self.chains.len()
	}

	pub fn is_empty(&self) -> bool {
		self.chains.is_empty()
	}
}
