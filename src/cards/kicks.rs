use super::rank::Rank;

/// A hand's tie-breaking ranks, most significant first.
///
/// Grouped ranks lead in order of multiplicity (the trips of a full
/// house before its pair), then by rank. Compared lexicographically,
/// so two hands of the same category order by their kickers.
#[derive(Debug, Clone, Default, Hash, Eq, PartialEq, PartialOrd, Ord, serde::Serialize)]
pub struct Kickers(Vec<Rank>);

impl Kickers {
    pub fn ranks(&self) -> &[Rank] {
        &self.0
    }
}

impl From<Vec<Rank>> for Kickers {
    fn from(ranks: Vec<Rank>) -> Self {
        Self(ranks)
    }
}
impl From<Kickers> for Vec<Rank> {
    fn from(k: Kickers) -> Self {
        k.0
    }
}

impl std::fmt::Display for Kickers {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for rank in self.0.iter() {
            write!(f, "{}", rank)?;
        }
        Ok(())
    }
}
