pub(crate) const ASCII_ART: &str = r#"
       ─────────────────────────
        ∀ ∃   a x i o m   ⊤ ⟘
       ─────────────────────────
"#;
