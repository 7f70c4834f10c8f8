use assert_cmd::Command;
use camino::Utf8PathBuf;
use cucumber::gherkin::Step;
use cucumber::{World, given, then, when};
use fleetsave_bdd::{breakdown_savings, disabled_options, parse_restriction_list};
use fs_err as fs;
use tempfile::TempDir;

#[derive(Debug, Default, World)]
pub struct FleetsaveWorld {
    temp: Option<TempDir>,
    root: Option<Utf8PathBuf>,
    args: Vec<String>,
    exit_code: Option<i32>,
    stdout: String,
    stderr: String,
    json: Option<serde_json::Value>,
}

impl FleetsaveWorld {
    fn root(&mut self) -> Utf8PathBuf {
        if self.root.is_none() {
            let td = tempfile::tempdir().expect("tempdir");
            let root = Utf8PathBuf::from_path_buf(td.path().to_path_buf()).expect("utf8 tempdir");
            self.temp = Some(td);
            self.root = Some(root);
        }
        self.root.clone().expect("root set")
    }

    fn push_flag(&mut self, flag: &str, value: impl ToString) {
        self.args.push(flag.to_string());
        self.args.push(value.to_string());
    }

    fn run(&mut self, subcommand: &str, extra: &[&str]) {
        let root = self.root();
        let output = Command::cargo_bin("fleetsave")
            .expect("fleetsave binary")
            .current_dir(root.as_str())
            .arg(subcommand)
            .args(&self.args)
            .args(extra)
            .output()
            .expect("run fleetsave");

        self.exit_code = output.status.code();
        self.stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        self.stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        self.json = serde_json::from_str(&self.stdout).ok();
    }

    fn report(&self) -> &serde_json::Value {
        self.json.as_ref().expect("command printed JSON")
    }
}

#[given(expr = "a fleet of {int} cars driving {int} km per year")]
async fn fleet(world: &mut FleetsaveWorld, cars: u32, mileage: u32) {
    world.push_flag("--cars", cars);
    world.push_flag("--mileage", mileage);
}

#[given(expr = "a fleet of {int} cars")]
async fn fleet_without_mileage(world: &mut FleetsaveWorld, cars: u32) {
    world.push_flag("--cars", cars);
}

#[given(expr = "the restrictions {string}")]
async fn restrictions(world: &mut FleetsaveWorld, list: String) {
    for kind in parse_restriction_list(&list).expect("restriction list") {
        world.push_flag("--restriction", kind);
    }
}

#[given(expr = "a monthly charging budget of {float} euros")]
async fn monthly_budget(world: &mut FleetsaveWorld, budget: f64) {
    world.push_flag("--monthly-budget", budget);
}

#[given(expr = "a kWh price cap of {float} euros")]
async fn price_cap(world: &mut FleetsaveWorld, cap: f64) {
    world.push_flag("--kwh-price-cap", cap);
}

#[given(expr = "charging allowed in {string}")]
async fn countries(world: &mut FleetsaveWorld, list: String) {
    for code in list.split(',').map(str::trim).filter(|c| !c.is_empty()) {
        world.push_flag("--country", code);
    }
}

#[given("a fleetsave.toml with:")]
async fn config_file(world: &mut FleetsaveWorld, step: &Step) {
    let contents = step.docstring.as_deref().expect("docstring with config");
    let root = world.root();
    fs::write(root.join("fleetsave.toml"), contents).expect("write fleetsave.toml");
}

#[when("I compute the estimate")]
async fn compute_json(world: &mut FleetsaveWorld) {
    world.run("compute", &["--format", "json"]);
}

#[when(expr = "I compute the estimate as {word}")]
async fn compute_as(world: &mut FleetsaveWorld, format: String) {
    world.run("compute", &["--format", &format]);
}

#[when("I ask which options are available")]
async fn options(world: &mut FleetsaveWorld) {
    world.run("options", &["--format", "json"]);
}

#[then(expr = "the {word} savings are {float} euros")]
async fn savings_are(world: &mut FleetsaveWorld, component: String, expected: f64) {
    assert_eq!(world.exit_code, Some(0), "stderr:\n{}", world.stderr);
    let actual = breakdown_savings(world.report(), &component)
        .unwrap_or_else(|| panic!("no {component}_savings in report:\n{}", world.stdout));
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {component} savings {expected}, got {actual}"
    );
}

#[then("no estimate is shown")]
async fn no_estimate(world: &mut FleetsaveWorld) {
    assert_eq!(world.exit_code, Some(0), "stderr:\n{}", world.stderr);
    assert!(world.report()["breakdown"].is_null());
}

#[then(expr = "the command fails with exit code {int}")]
async fn fails_with(world: &mut FleetsaveWorld, code: i32) {
    assert_eq!(world.exit_code, Some(code), "stdout:\n{}", world.stdout);
}

#[then(expr = "the output contains {string}")]
async fn output_contains(world: &mut FleetsaveWorld, needle: String) {
    assert!(
        world.stdout.contains(&needle),
        "expected {needle:?} in stdout:\n{}",
        world.stdout
    );
}

#[then(expr = "the error mentions {string}")]
async fn error_mentions(world: &mut FleetsaveWorld, needle: String) {
    assert!(
        world.stderr.contains(&needle),
        "expected {needle:?} in stderr:\n{}",
        world.stderr
    );
}

#[then(expr = "the disabled options are {string}")]
async fn disabled_are(world: &mut FleetsaveWorld, list: String) {
    let expected: Vec<String> = parse_restriction_list(&list)
        .expect("restriction list")
        .into_iter()
        .map(|k| k.as_str().to_string())
        .collect();
    let options = match world.report().get("selection") {
        Some(selection) => &selection["options"],
        None => &world.report()["options"],
    };
    assert_eq!(disabled_options(options), expected);
}

#[tokio::main]
async fn main() {
    let features_path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("features");
    FleetsaveWorld::cucumber().run_and_exit(features_path).await;
}
