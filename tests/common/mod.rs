//! Shared fixtures: an invoice line builder with sensible defaults and a
//! dataset builder that prepends the header.

#![allow(dead_code)]

pub const HEADER: &str =
    "Num_factura, Fecha, Bruto, Neto, IVA, IGIC, Concepto, CIF_cliente, NIF_cliente";

/// One data row. Defaults describe an admissible invoice:
/// gross 1000, net 810, IVA 19, CIF B76430134.
#[derive(Debug, Clone)]
pub struct InvoiceLine {
    id: String,
    date: String,
    gross: String,
    net: String,
    iva: String,
    igic: String,
    concept: String,
    cif: String,
    nif: String,
}

impl Default for InvoiceLine {
    fn default() -> Self {
        Self {
            id: "1".into(),
            date: "02/05/2019".into(),
            gross: "1000".into(),
            net: "810".into(),
            iva: "19".into(),
            igic: String::new(),
            concept: "irrelevant".into(),
            cif: "B76430134".into(),
            nif: String::new(),
        }
    }
}

impl InvoiceLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: &str) -> Self {
        self.id = id.into();
        self
    }

    pub fn gross(mut self, gross: &str) -> Self {
        self.gross = gross.into();
        self
    }

    pub fn net(mut self, net: &str) -> Self {
        self.net = net.into();
        self
    }

    pub fn iva(mut self, iva: &str) -> Self {
        self.iva = iva.into();
        self
    }

    pub fn igic(mut self, igic: &str) -> Self {
        self.igic = igic.into();
        self
    }

    pub fn concept(mut self, concept: &str) -> Self {
        self.concept = concept.into();
        self
    }

    pub fn cif(mut self, cif: &str) -> Self {
        self.cif = cif.into();
        self
    }

    pub fn nif(mut self, nif: &str) -> Self {
        self.nif = nif.into();
        self
    }

    pub fn build(&self) -> String {
        [
            &self.id,
            &self.date,
            &self.gross,
            &self.net,
            &self.iva,
            &self.igic,
            &self.concept,
            &self.cif,
            &self.nif,
        ]
        .map(String::as_str)
        .join(",")
    }
}

/// Header plus data rows, as the filter receives them.
#[derive(Debug, Clone)]
pub struct Dataset {
    header: String,
    rows: Vec<String>,
}

impl Default for Dataset {
    fn default() -> Self {
        Self {
            header: HEADER.into(),
            rows: Vec::new(),
        }
    }
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(mut self, header: &str) -> Self {
        self.header = header.into();
        self
    }

    pub fn line(mut self, line: InvoiceLine) -> Self {
        self.rows.push(line.build());
        self
    }

    pub fn raw(mut self, row: &str) -> Self {
        self.rows.push(row.into());
        self
    }

    pub fn build(&self) -> Vec<String> {
        std::iter::once(self.header.clone())
            .chain(self.rows.iter().cloned())
            .collect()
    }
}

/// Header plus a single row.
pub fn one_line(line: InvoiceLine) -> Vec<String> {
    Dataset::new().line(line).build()
}

/// What the filter returns when every data row is dropped.
pub fn header_only() -> Vec<String> {
    vec![HEADER.to_string()]
}
