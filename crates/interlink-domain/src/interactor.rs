//! Interactor references

/// Reference to a molecule taking part in an interaction
///
/// Only the external accession is used for pairing; the remaining fields are
/// carried through so downstream writers can render gene names and organisms.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InteractorRef {
    /// Opaque identifier in the curation database
    pub id: String,

    /// Display label (short name)
    pub label: Option<String>,

    /// External accession in the partner protein database
    pub accession: Option<String>,

    /// Preferred gene name
    pub gene_name: Option<String>,

    /// NCBI taxonomy identifier of the source organism
    pub taxid: Option<i32>,
}

impl InteractorRef {
    /// Create an interactor reference with only its identifier set
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: None,
            accession: None,
            gene_name: None,
            taxid: None,
        }
    }

    /// Set the display label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the external accession
    pub fn with_accession(mut self, accession: impl Into<String>) -> Self {
        self.accession = Some(accession.into());
        self
    }

    /// Set the gene name
    pub fn with_gene_name(mut self, gene_name: impl Into<String>) -> Self {
        self.gene_name = Some(gene_name.into());
        self
    }

    /// Set the taxonomy identifier
    pub fn with_taxid(mut self, taxid: i32) -> Self {
        self.taxid = Some(taxid);
        self
    }

    /// The external accession, if present and not blank
    ///
    /// # Examples
    ///
    /// ```
    /// use interlink_domain::InteractorRef;
    ///
    /// let resolved = InteractorRef::new("EBI-1").with_accession(" P12345 ");
    /// assert_eq!(resolved.resolved_accession(), Some("P12345"));
    ///
    /// let blank = InteractorRef::new("EBI-2").with_accession("");
    /// assert_eq!(blank.resolved_accession(), None);
    /// ```
    pub fn resolved_accession(&self) -> Option<&str> {
        self.accession
            .as_deref()
            .map(str::trim)
            .filter(|acc| !acc.is_empty())
    }
}
