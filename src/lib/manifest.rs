use crate::semantics::*;
use crate::*;
use serde::Deserialize;
use std::str::FromStr;

/// The YAML document declaring types, interfaces, classes and bindings.
///
/// ```yaml
/// types:
///   - name: Food
///   - name: Burger
///     parent: Food
/// interfaces:
///   - name: Production
///     parameter: T
///     variance: out
///     methods:
///       - selector: produce
///         returns: T
/// classes:
///   - name: InOutBurger
///     implements: [Production<Burger>]
/// bindings:
///   - name: prod3
///     type: Production<Food>
///     value: InOutBurger
/// ```
#[derive(Deserialize, Default, Debug)]
#[serde(default, deny_unknown_fields)]
pub struct Manifest {
    pub types: Vec<TypeDeclaration>,
    pub interfaces: Vec<InterfaceDeclaration>,
    pub classes: Vec<ClassDeclaration>,
    pub bindings: Vec<BindingDeclaration>,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct TypeDeclaration {
    pub name: String,
    pub parent: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct InterfaceDeclaration {
    pub name: String,
    pub parameter: String,
    pub variance: Option<String>,
    #[serde(default)]
    pub methods: Vec<MethodDeclaration>,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct MethodDeclaration {
    pub selector: String,
    #[serde(default)]
    pub parameters: Vec<String>,
    pub returns: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct ClassDeclaration {
    pub name: String,
    #[serde(default)]
    pub implements: Vec<String>,
}

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct BindingDeclaration {
    pub name: String,
    #[serde(rename = "type")]
    pub type_: String,
    pub value: String,
}

impl Manifest {
    pub fn from_source(source: &Source) -> Result<Manifest, Diagnostic> {
        if source.code.trim().is_empty() {
            return Ok(Manifest::default());
        }
        serde_yaml::from_str(&source.code).map_err(|error| {
            Diagnostic::SyntaxError(
                Some(source.uri.clone()),
                format!("{} is not a valid manifest: {}", source.uri, error),
            )
        })
    }

    /// Loads all sources into a single analysis. Diagnostics found while
    /// loading (malformed documents, unresolvable types) are returned
    /// alongside; the analysis holds whatever could be declared.
    pub fn analyze(sources: &[Arc<Source>]) -> (Analysis, Vec<Diagnostic>) {
        let mut diagnostics = vec![];
        let mut manifests = vec![];

        for source in sources {
            match Manifest::from_source(source) {
                Ok(manifest) => {
                    debug!("Loaded {}", source);
                    manifests.push((source.uri.clone(), manifest));
                }
                Err(diagnostic) => diagnostics.push(diagnostic),
            }
        }

        let type_declarations = manifests.iter().flat_map(|(uri, manifest)| {
            manifest.types.iter().map(move |t| {
                (
                    Symbol::declared_in(uri, t.name.as_str()),
                    t.parent
                        .as_ref()
                        .map(|p| Symbol::declared_in(uri, p.as_str())),
                )
            })
        });
        let (hierarchy, hierarchy_diagnostics) = Hierarchy::from_declarations(type_declarations);
        diagnostics.extend(hierarchy_diagnostics);

        let mut analysis = Analysis::new(hierarchy);

        for (uri, manifest) in manifests.iter() {
            for declaration in manifest.interfaces.iter() {
                if let Some(interface) = declaration.declare(uri, &mut diagnostics) {
                    analysis.interfaces.push(Arc::new(interface));
                }
            }

            for declaration in manifest.classes.iter() {
                let implements = declaration
                    .implements
                    .iter()
                    .filter_map(|i| notation(i, uri, &mut diagnostics))
                    .collect();

                analysis.classes.push(Arc::new(Class {
                    name: Symbol::declared_in(uri, declaration.name.as_str()),
                    implements,
                }));
            }

            for declaration in manifest.bindings.iter() {
                if let Some(declared) = notation(&declaration.type_, uri, &mut diagnostics) {
                    analysis.bindings.push(Arc::new(Binding {
                        name: Symbol::declared_in(uri, declaration.name.as_str()),
                        declared,
                        value: Symbol::declared_in(uri, declaration.value.as_str()),
                    }));
                }
            }
        }

        info!(
            "Analyzing {} types, {} interfaces, {} classes and {} bindings",
            analysis.hierarchy.len(),
            analysis.interfaces.len(),
            analysis.classes.len(),
            analysis.bindings.len()
        );

        (analysis, diagnostics)
    }
}

impl InterfaceDeclaration {
    fn declare(&self, uri: &URI, diagnostics: &mut Vec<Diagnostic>) -> Option<GenericInterface> {
        let variance = match self.variance {
            None => Variance::Invariant,
            Some(ref keyword) => match Variance::from_str(keyword) {
                Ok(variance) => variance,
                Err(_) => {
                    diagnostics.push(Diagnostic::SyntaxError(
                        Some(uri.clone()),
                        format!(
                            "`{}` is not a variance of `{}`; expected `out`, `in` or `inout`.",
                            keyword, self.name
                        ),
                    ));
                    return None;
                }
            },
        };

        let mut methods = vec![];
        for method in self.methods.iter() {
            let parameters = method
                .parameters
                .iter()
                .map(|p| notation(p, uri, diagnostics))
                .collect::<Option<Vec<_>>>();
            let return_type = match method.returns {
                None => Some(None),
                Some(ref r) => notation(r, uri, diagnostics).map(Some),
            };

            if let (Some(parameters), Some(return_type)) = (parameters, return_type) {
                methods.push(Signature {
                    selector: Symbol::declared_in(uri, method.selector.as_str()),
                    parameters,
                    return_type,
                });
            }
        }

        Some(GenericInterface {
            name: Symbol::declared_in(uri, self.name.as_str()),
            parameter: TypeParameter {
                name: Symbol::declared_in(uri, self.parameter.as_str()),
                variance,
            },
            methods,
        })
    }
}

fn notation(s: &str, uri: &URI, diagnostics: &mut Vec<Diagnostic>) -> Option<TypeExpression> {
    match TypeExpression::from_notation(s, Some(uri)) {
        Ok(expression) => Some(expression),
        Err(message) => {
            diagnostics.push(Diagnostic::SyntaxError(Some(uri.clone()), message));
            None
        }
    }
}
