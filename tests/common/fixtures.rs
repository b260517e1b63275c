//! Test fixtures - reusable content constants for tests.

/// A small obographs document with two classes and one subclass edge
pub const PATO_JSON: &str = r#"{
  "graphs": [
    {
      "id": "http://purl.obolibrary.org/obo/pato.owl",
      "nodes": [
        { "id": "http://purl.obolibrary.org/obo/PATO_0000001", "lbl": "quality", "type": "CLASS" },
        { "id": "http://purl.obolibrary.org/obo/PATO_0000070", "lbl": "count", "type": "CLASS" }
      ],
      "edges": [
        {
          "sub": "http://purl.obolibrary.org/obo/PATO_0000070",
          "pred": "is_a",
          "obj": "http://purl.obolibrary.org/obo/PATO_0000001"
        }
      ],
      "meta": { "version": "pato/releases/2024-01-01/pato.owl" }
    }
  ]
}"#;

/// A one-node document written by the fake converters
pub const CONVERTED_JSON: &str =
    r#"{"graphs":[{"nodes":[{"id":"X:1","lbl":"converted"}],"edges":[]}]}"#;

/// Minimal OBO source text; only its presence on disk matters to the resolver
pub const PATO_OBO: &str =
    "format-version: 1.2\nontology: pato\n\n[Term]\nid: PATO:0000001\nname: quality\n";

/// Project config pointing the default handle at a local file
pub const PROJECT_CONFIG: &str = r#"
[defaults]
handle = "pato.json"

[remote]
endpoint = "http://sparql.example.org/sparql"
"#;
