//! The launchd property list that starts `notifyserver run` when the
//! user logs in. Rendering goes through Handlebars so the binary path
//! and listen address are XML escaped.

use std::path::Path;

use anyhow::Result;
use handlebars::Handlebars;
use serde::Serialize;

/// Label launchd knows the agent by. Also the plist file name.
pub const LAUNCHD_LABEL: &str = "com.github.nemith.notifyserver";

const PLIST: &str = "plist";

const PLIST_TEMPLATE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE plist PUBLIC "-//Apple//DTD PLIST 1.0//EN" "http://www.apple.com/DTDs/PropertyList-1.0.dtd">
<plist version="1.0">
	<dict>
		<key>Label</key>
		<string>{{label}}</string>
		<key>ProgramArguments</key>
		<array>
			<string>{{path}}</string>
			<string>run</string>{{#if http_addr}}
			<string>--http</string>
			<string>{{http_addr}}</string>{{/if}}
		</array>
		<key>RunAtLoad</key>
		<true/>
		<key>KeepAlive</key>
		<dict>
			<key>SuccessfulExit</key>
			<true/>
		</dict>
	</dict>
</plist>
"#;

#[derive(Serialize)]
struct PlistContext<'a> {
    label: &'a str,
    path: String,
    http_addr: Option<&'a str>,
}

fn templates<'a>() -> Handlebars<'a> {
    let mut registry = Handlebars::new();
    registry.set_strict_mode(true);
    registry
        .register_template_string(PLIST, PLIST_TEMPLATE)
        .expect("Failed to register template");
    registry
}

/// Render the agent plist for `bin`. The `--http` argument is only
/// added when an address is given.
pub fn render_plist(bin: &Path, http_addr: Option<&str>) -> Result<String> {
    let context = PlistContext {
        label: LAUNCHD_LABEL,
        path: bin.display().to_string(),
        http_addr: http_addr.filter(|addr| !addr.is_empty()),
    };
    Ok(templates().render(PLIST, &context)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn it_renders_without_http_addr() {
        let plist = render_plist(Path::new("/usr/local/bin/notifyserver"), None).unwrap();

        assert!(plist.contains("<string>com.github.nemith.notifyserver</string>"));
        assert!(plist.contains(
            "<string>/usr/local/bin/notifyserver</string>\n\t\t\t<string>run</string>\n\t\t</array>"
        ));
        assert!(!plist.contains("--http"));
        assert!(plist.contains("<key>RunAtLoad</key>\n\t\t<true/>"));
        assert!(plist.contains(
            "<key>KeepAlive</key>\n\t\t<dict>\n\t\t\t<key>SuccessfulExit</key>\n\t\t\t<true/>\n\t\t</dict>\n\t</dict>"
        ));
    }

    #[test]
    fn it_renders_http_addr_as_separate_arguments() {
        let plist = render_plist(
            Path::new("/usr/local/bin/notifyserver"),
            Some("0.0.0.0:8080"),
        )
        .unwrap();

        assert!(plist.contains(
            "<string>run</string>\n\t\t\t<string>--http</string>\n\t\t\t<string>0.0.0.0:8080</string>\n\t\t</array>"
        ));
    }

    #[test]
    fn it_treats_an_empty_http_addr_as_absent() {
        let plist = render_plist(Path::new("/bin/notifyserver"), Some("")).unwrap();
        assert!(!plist.contains("--http"));
    }

    #[test]
    fn it_escapes_xml_in_the_binary_path() {
        let plist = render_plist(Path::new("/Users/me/R&D/<bin>/notifyserver"), None).unwrap();
        assert!(plist.contains("<string>/Users/me/R&amp;D/&lt;bin&gt;/notifyserver</string>"));
    }
}
