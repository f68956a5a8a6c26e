/// For every node, the list of elements that contain it
///
/// Stored in compressed row layout: the elements incident to node `n` are
/// `elements[offsets[n]..offsets[n + 1]]`, in ascending element order. An element that lists a node more than
/// once is still recorded only once for that node.
///
/// ```
/// # use neutrino_algorithms::incidence::ElementIncidence;
/// // Two triangles sharing the edge 1-2
/// let element = vec![0, 1, 2, 1, 3, 2];
/// let element_offset = vec![3, 6];
/// let incidence = ElementIncidence::build(4, &element, &element_offset);
/// assert_eq!(incidence.incident_elements(0), &[0]);
/// assert_eq!(incidence.incident_elements(2), &[0, 1]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementIncidence {
    offsets: Vec<usize>,
    elements: Vec<u32>,
}

impl ElementIncidence {
    /// Builds the incidence table for `node_count` nodes from flattened element connectivity. Node indices in
    /// `element` must be less than `node_count`
    pub fn build(node_count: usize, element: &[u32], element_offset: &[u32]) -> Self {
        let slices = || {
            let mut start = 0;
            element_offset.iter().map(move |end| {
                let slice = &element[start..*end as usize];
                start = *end as usize;
                slice
            })
        };

        let mut offsets = vec![0; node_count + 1];
        for slice in slices() {
            for (position, node) in slice.iter().enumerate() {
                if !slice[..position].contains(node) {
                    offsets[*node as usize + 1] += 1;
                }
            }
        }
        for n in 0..node_count {
            offsets[n + 1] += offsets[n];
        }

        let mut cursor = offsets.clone();
        let mut elements = vec![0; offsets[node_count]];
        for (k, slice) in slices().enumerate() {
            for (position, node) in slice.iter().enumerate() {
                if !slice[..position].contains(node) {
                    let n = *node as usize;
                    elements[cursor[n]] = k as u32;
                    cursor[n] += 1;
                }
            }
        }

        Self { offsets, elements }
    }

    /// Elements that contain node `node`, in ascending order. Nodes outside of the table have no elements
    pub fn incident_elements(&self, node: usize) -> &[u32] {
        if node + 1 >= self.offsets.len() {
            return &[];
        }
        &self.elements[self.offsets[node]..self.offsets[node + 1]]
    }

    /// Number of nodes in this table
    pub fn node_count(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Total number of (node, element) pairs
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}
