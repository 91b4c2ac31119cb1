use crate::semantics::*;
use crate::*;
use log::LevelFilter;
use serde::Deserialize;

#[derive(Deserialize)]
struct FixtureConfig {
    expected: FixtureExpectations,
    #[serde(default)]
    queries: Vec<FixtureQuery>,
}

#[derive(Deserialize)]
struct FixtureExpectations {
    success: bool,
    #[serde(default)]
    diagnostics: Vec<String>,
}

#[derive(Deserialize)]
struct FixtureQuery {
    variance: String,
    source: String,
    target: String,
    expected: QueryOutcome,
}

#[derive(Deserialize, Debug, PartialEq)]
#[serde(rename_all = "snake_case")]
enum QueryOutcome {
    Assignable,
    Unassignable,
    InvalidHierarchy,
}

fn run_query(analysis: &Analysis, query: &FixtureQuery) -> Result<QueryOutcome, String> {
    let variance: Variance = query
        .variance
        .parse()
        .map_err(|_| format!("`{}` is not a variance", query.variance))?;
    let source = analysis
        .hierarchy
        .get(&query.source)
        .ok_or_else(|| format!("`{}` is undefined", query.source))?;
    let target = analysis
        .hierarchy
        .get(&query.target)
        .ok_or_else(|| format!("`{}` is undefined", query.target))?;

    Ok(match VarianceChecker::is_assignable(variance, source, target) {
        Ok(true) => QueryOutcome::Assignable,
        Ok(false) => QueryOutcome::Unassignable,
        Err(_) => QueryOutcome::InvalidHierarchy,
    })
}

#[test]
fn fixtures() {
    simple_logging::log_to_stderr(LevelFilter::Debug);

    let mut failures = vec![];

    let pattern = concat!(env!("CARGO_MANIFEST_DIR"), "/src/__fixtures__/*");
    for entry in glob::glob(pattern).unwrap() {
        let entry = entry.unwrap();

        let fixture_name = entry
            .file_name()
            .and_then(std::ffi::OsStr::to_str)
            .unwrap()
            .to_string();
        if fixture_name.starts_with('_') {
            continue;
        }

        let mut fixture_config_path = entry.clone();
        fixture_config_path.push("fixture.yml");

        let fixture_config: FixtureConfig =
            serde_yaml::from_reader(std::fs::File::open(fixture_config_path).unwrap()).unwrap();

        let mut manifests_path = entry.clone();
        manifests_path.push("**");
        manifests_path.push("*.variance.yml");

        let sources = Source::files(manifests_path.to_str().unwrap()).unwrap();
        let (analysis, mut diagnostics) = Manifest::analyze(&sources);
        diagnostics.extend(analysis.check());

        let actual_success = !Diagnostic::failed(&diagnostics);
        let mut actual = diagnostics
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>();

        for expected in fixture_config.expected.diagnostics.iter() {
            match actual.iter().position(|a| a == expected) {
                Some(i) => {
                    actual.remove(i);
                }
                None => failures.push(format!(
                    "{}:\nExpected diagnostic: {:?}",
                    fixture_name, expected
                )),
            }
        }
        for unexpected in actual {
            failures.push(format!(
                "{}:\nUnexpected diagnostic: {:?}",
                fixture_name, unexpected
            ));
        }

        if fixture_config.expected.success != actual_success {
            failures.push(format!(
                "Expected {} to {}",
                fixture_name,
                if fixture_config.expected.success {
                    "be successful"
                } else {
                    "fail"
                }
            ));
        }

        for query in fixture_config.queries.iter() {
            match run_query(&analysis, query) {
                Ok(ref outcome) if *outcome == query.expected => {}
                Ok(outcome) => failures.push(format!(
                    "{}:\nExpected {} {} -> {} to be {:?}, but it was {:?}",
                    fixture_name,
                    query.variance,
                    query.source,
                    query.target,
                    query.expected,
                    outcome
                )),
                Err(message) => failures.push(format!("{}:\n{}", fixture_name, message)),
            }
        }
    }

    assert!(failures.is_empty(), "\n\n{}", failures.join("\n\n"));
}
