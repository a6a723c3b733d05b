use html::{attributes, describe, render, Attributes, LeafNode, Node, ParentNode, ValidationError};
use std::process::ExitCode;
use tracing::{error, info, span, Level};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

struct Args {
    pub describe: bool,
    pub trace: bool,
}

fn main() -> ExitCode {
    let args = match parse_args() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("Could not parse arguments: {}", err);
            return ExitCode::FAILURE;
        }
    };
    if args.trace {
        tracing_subscriber::fmt::fmt()
            .with_span_events(FmtSpan::ACTIVE)
            .with_max_level(Level::TRACE)
            .with_env_filter(EnvFilter::from_default_env())
            .finish()
            .init();
        info!("Logger initialized");
    }

    let page = match sample_page() {
        Ok(page) => page,
        Err(err) => {
            error!(%err, "Could not build page");
            eprintln!("{}", err);
            return ExitCode::FAILURE;
        }
    };

    if args.describe {
        println!("{}", describe(&page));
        return ExitCode::SUCCESS;
    }

    let span = span!(Level::DEBUG, "Rendering page");
    let _enter = span.enter();
    match render(&page) {
        Ok(markup) => {
            println!("{}", markup);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "Could not render page");
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn parse_args() -> Result<Args, pico_args::Error> {
    let mut pargs = pico_args::Arguments::from_env();
    let args = Args {
        describe: pargs.contains(["--describe", "-d"]),
        trace: pargs.contains(["--trace", "-t"]),
    };
    let remaining = pargs.finish();
    if let Some(arg) = remaining.first() {
        return Err(pico_args::Error::ArgumentParsingFailed {
            cause: format!("unexpected argument {:?}", arg),
        });
    }
    Ok(args)
}

fn leaf(tag: &str, value: &str, attributes: Option<Attributes>) -> Result<Node, ValidationError> {
    Ok(LeafNode::new(tag, value, attributes)?.into())
}

fn parent(tag: &str, children: Vec<Node>, attributes: Option<Attributes>) -> Result<Node, ValidationError> {
    Ok(ParentNode::new(tag, children, attributes)?.into())
}

/// A small document exercising text, void and nested elements
fn sample_page() -> Result<Node, ValidationError> {
    parent(
        "html",
        vec![
            parent(
                "head",
                vec![
                    leaf("meta", "", Some(attributes!(charset => "utf-8")))?,
                    leaf("title", "Sample page", None)?,
                ],
                None,
            )?,
            parent(
                "body",
                vec![
                    leaf("h1", "Hello, world", Some(attributes!(id => title)))?,
                    parent(
                        "p",
                        vec![
                            LeafNode::text("Visit ")?.into(),
                            leaf("a", "Google", Some(attributes!(href => "https://google.com")))?,
                            leaf("br", "", None)?,
                        ],
                        Some(attributes!(class => intro)),
                    )?,
                    leaf(
                        "img",
                        "",
                        Some(attributes!(alt => image, src => "https://google.com")),
                    )?,
                ],
                None,
            )?,
        ],
        Some(attributes!(lang => en)),
    )
}

#[cfg(test)]
#[test]
fn test_sample_page() {
    let page = sample_page().unwrap();
    assert_eq!(
        render(&page).as_deref(),
        Ok(concat!(
            r#"<html lang="en"><head><meta charset="utf-8"><title>Sample page</title></head>"#,
            r#"<body><h1 id="title">Hello, world</h1>"#,
            r#"<p class="intro">Visit <a href="https://google.com">Google</a><br></p>"#,
            r#"<img alt="image" src="https://google.com"></body></html>"#,
        ))
    );
}
