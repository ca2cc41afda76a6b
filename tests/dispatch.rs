//! End-to-end dispatch scenarios for the route table.

use std::sync::Arc;

use http::StatusCode;
use urlmux::{
    build_table, AppLoader, Application, ResolveError, RouteKey, RouteRequest, RouteResponse,
    RouteTable,
};

fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "urlmux=debug".into());
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_test_writer())
        .try_init();
}

/// Test application: replies `<name>|<script_name>|<path_info>`.
fn app(name: &'static str) -> Arc<dyn Application> {
    Arc::new(move |req: RouteRequest| {
        RouteResponse::ok(format!("{name}|{}|{}", req.script_name, req.path_info))
    })
}

fn key(url: &str) -> RouteKey {
    RouteKey::parse(url).unwrap()
}

/// Table from the canonical scenario: `/`→A, `/foo`→B, `/foo/bar`→C, `/f`→D.
fn scenario_table() -> RouteTable {
    let table = RouteTable::new();
    table.set(key("/"), Some(app("A")));
    table.set(key("/foo"), Some(app("B")));
    table.set(key("/foo/bar"), Some(app("C")));
    table.set(key("/f"), Some(app("D")));
    table
}

#[test]
fn scenario_prefix_precedence() {
    init_tracing();
    let table = scenario_table();

    let (resp, matched) = table.dispatch(RouteRequest::new("/foo/and/more"));
    assert_eq!(resp.body, "B|/foo|/and/more");
    assert_eq!(matched, Some(key("/foo")));

    let (resp, matched) = table.dispatch(RouteRequest::new("/foo/bar/baz"));
    assert_eq!(resp.body, "C|/foo/bar|/baz");
    assert_eq!(matched, Some(key("/foo/bar")));

    // /fffzzz is not a segment under /f or /foo, so the root catches it
    let (resp, matched) = table.dispatch(RouteRequest::new("/fffzzz"));
    assert_eq!(resp.body, "A||/fffzzz");
    assert_eq!(matched, Some(key("/")));

    let (resp, matched) = table.dispatch(RouteRequest::new("/f/z/y"));
    assert_eq!(resp.body, "D|/f|/z/y");
    assert_eq!(matched, Some(key("/f")));
}

#[test]
fn scenario_sort_order() {
    let table = scenario_table();
    assert_eq!(
        table.keys(),
        vec![key("/foo/bar"), key("/foo"), key("/f"), key("/")]
    );
}

#[test]
fn nested_mounts_accumulate_script_name() {
    // An application that is itself a table: the outer table consumes /outer,
    // the inner one consumes /inner from what remains.
    let inner = Arc::new({
        let table = RouteTable::new();
        table.set(key("/inner"), Some(app("leaf")));
        move |req: RouteRequest| table.dispatch(req).0
    });

    let outer = RouteTable::new();
    outer.set(key("/outer"), Some(inner as Arc<dyn Application>));

    let (resp, _) = outer.dispatch(RouteRequest::new("/outer/inner/rest"));
    assert_eq!(resp.body, "leaf|/outer/inner|/rest");
}

#[test]
fn domain_scoping_end_to_end() {
    let table = RouteTable::new();
    table.set(key("/x"), Some(app("any")));
    table.set(key("http://example.com/x"), Some(app("example")));
    table.set(key("http://example.com:8080/x"), Some(app("alt-port")));

    let (resp, _) = table.dispatch(RouteRequest::new("/x/1").with_host("example.com"));
    assert!(resp.body.starts_with("example|"));

    let (resp, _) = table.dispatch(RouteRequest::new("/x/1").with_host("example.com:8080"));
    assert!(resp.body.starts_with("alt-port|"));

    let (resp, _) = table.dispatch(RouteRequest::new("/x/1").with_host("elsewhere.org"));
    assert!(resp.body.starts_with("any|"));
}

#[test]
fn default_fallback_lists_routes() {
    let table = scenario_table();
    table.remove(&key("/")).unwrap();

    let (resp, matched) = table.dispatch(RouteRequest::new("/nope"));
    assert_eq!(resp.status, StatusCode::NOT_FOUND);
    assert_eq!(matched, None);
    for route in ["/foo/bar", "/foo", "/f"] {
        assert!(resp.body.contains(route), "body missing {route}: {}", resp.body);
    }
}

struct EchoLoader;

impl AppLoader for EchoLoader {
    fn resolve(&self, name: &str) -> Result<Arc<dyn Application>, ResolveError> {
        if name == "missing" {
            return Err(ResolveError::new(name));
        }
        let name = name.to_string();
        Ok(Arc::new(move |req: RouteRequest| {
            RouteResponse::ok(format!("{name}|{}|{}", req.script_name, req.path_info))
        }))
    }
}

#[test]
fn config_to_dispatch_round_trip() {
    init_tracing();
    let config = toml::from_str(
        r#"
        not_found_app = "fallback"

        [[routes]]
        path = "/"
        app = "root"

        [[routes]]
        path = "domain example.com port 8080 /api"
        app = "api"
        "#,
    )
    .unwrap();

    let table = build_table(&EchoLoader, &config).unwrap();

    let (resp, _) = table.dispatch(RouteRequest::new("/api/v1").with_host("example.com:8080"));
    assert_eq!(resp.body, "api|/api|/v1");

    let (resp, _) = table.dispatch(RouteRequest::new("/elsewhere"));
    assert_eq!(resp.body, "root||/elsewhere");
}
