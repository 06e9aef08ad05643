//! Generation of the type-intersection suffix.
//!
//! For a block named `customBlock_0` exporting `$title = 'x'` and
//! `$count = 1`, the generated codes read as
//!
//! ```text
//!  & { title: string; count: number; }
//! ```
//!
//! where each member name is a mapped fragment pointing back at the
//! variable's first occurrence inside the block.
use crate::types::{Code, CodeFeatures, ExportedVariable};

/// Render the intersection suffix for the exported variables of one block.
///
/// `source` is the block name the host uses to resolve mapped offsets.
pub fn render(source: &str, variables: &[ExportedVariable]) -> Vec<Code> {
    let mut codes = Vec::with_capacity(variables.len() * 2 + 2);
    codes.push(Code::from(" & { "));
    for variable in variables {
        codes.push(Code::Mapped(
            variable.name.clone(),
            source.to_string(),
            variable.offset,
            CodeFeatures { navigation: true },
        ));
        codes.push(Code::Text(format!(": {}; ", variable.ty)));
    }
    codes.push(Code::from("}"));
    codes
}

/// Concatenate the text of `codes` into plain generated code.
pub fn to_source(codes: &[Code]) -> String {
    codes.iter().map(Code::text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::VariableBinding;

    #[test]
    fn renders_members_in_order() {
        let vars = vec![
            VariableBinding {
                name: "title".into(),
                offset: 1,
                ty: "string",
            },
            VariableBinding {
                name: "count".into(),
                offset: 15,
                ty: "number",
            },
        ];
        let codes = render("customBlock_0", &vars);

        assert_eq!(to_source(&codes), " & { title: string; count: number; }");
        assert_eq!(
            codes[1],
            Code::Mapped(
                "title".into(),
                "customBlock_0".into(),
                1,
                CodeFeatures { navigation: true }
            )
        );
        assert_eq!(codes.len(), 6);
    }

    #[test]
    fn no_variables_still_closes_the_object() {
        assert_eq!(to_source(&render("customBlock_0", &[])), " & { }");
    }
}
