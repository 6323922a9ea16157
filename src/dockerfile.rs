//! Build recipe for the bundle image.

const BASE_IMAGE: &str = "ansibleplaybookbundle/helm-bundle-base";
const CHART_DEST: &str = "/opt/chart.tgz";
const PLACEHOLDER: &str = "{chart_file}";

const TEMPLATE: &str = r#"FROM {base_image}

COPY [{chart_file}, "{chart_dest}"]

ENTRYPOINT ["entrypoint.sh"]
"#;

/// Render the Dockerfile that copies the chart archive `chart_file` into the
/// bundle base image.
pub fn render(chart_file: &str) -> String {
    // Exec form, so the file name is a JSON string and may contain spaces.
    let quoted = serde_json::Value::from(chart_file).to_string();
    TEMPLATE
        .replace("{base_image}", BASE_IMAGE)
        .replace("{chart_dest}", CHART_DEST)
        .replace(PLACEHOLDER, &quoted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render() {
        assert_eq!(
            render("redis-1.1.12.tgz"),
            "FROM ansibleplaybookbundle/helm-bundle-base\n\
             \n\
             COPY [\"redis-1.1.12.tgz\", \"/opt/chart.tgz\"]\n\
             \n\
             ENTRYPOINT [\"entrypoint.sh\"]\n"
        );
    }

    #[test]
    fn test_render_copy_line_names_only_archive() {
        let out = render("redis-1.1.12.tgz");
        let copies: Vec<&str> = out.lines().filter(|l| l.starts_with("COPY ")).collect();
        assert_eq!(copies.len(), 1);
        let args: Vec<String> = serde_json::from_str(&copies[0]["COPY ".len()..]).unwrap();
        assert_eq!(args, ["redis-1.1.12.tgz", CHART_DEST]);
        assert!(!out.contains(PLACEHOLDER));
    }

    #[test]
    fn test_render_quotes_file_name() {
        let out = render("my \"chart\" 1.0.tgz");
        assert!(out.contains(r#"COPY ["my \"chart\" 1.0.tgz", "/opt/chart.tgz"]"#));
    }
}
