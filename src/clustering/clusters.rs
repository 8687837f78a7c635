use std::collections::BTreeMap;

/// Points grouped under the index of their nearest centroid.
///
/// Members keep the order they were assigned in. A cluster exists only once
/// its first member arrives, so indices of centroids that never won a point
/// are absent rather than empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Clusters<P> {
    members: BTreeMap<usize, Vec<P>>,
}

impl<P> Clusters<P> {
    /// Members assigned to centroid `j`, in assignment order.
    pub fn members(&self, j: usize) -> Option<&[P]> {
        self.members.get(&j).map(Vec::as_slice)
    }
    /// Number of centroids with at least one member.
    pub fn len(&self) -> usize {
        self.members.len()
    }
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
    /// Total members across all clusters.
    pub fn count(&self) -> usize {
        self.members.values().map(Vec::len).sum()
    }
    /// Clusters in centroid index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[P])> {
        self.members.iter().map(|(j, ps)| (*j, ps.as_slice()))
    }
    pub(crate) fn push(&mut self, j: usize, x: P) {
        self.members.entry(j).or_default().push(x);
    }
}

impl<P> Default for Clusters<P> {
    fn default() -> Self {
        Self {
            members: BTreeMap::new(),
        }
    }
}

impl<P> From<Clusters<P>> for BTreeMap<usize, Vec<P>> {
    fn from(clusters: Clusters<P>) -> Self {
        clusters.members
    }
}

impl<P> std::fmt::Display for Clusters<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (j, ps) in self.iter() {
            writeln!(f, "{:>4} {:>8}", j, ps.len())?;
        }
        Ok(())
    }
}
