//! HTML rendering for the single-page UI.
//!
//! A generate response is streamed in pieces: [`page_head`] first, then one
//! fragment per [`View`], then [`page_tail`].

use html_escape::{encode_double_quoted_attribute, encode_text};
use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

use crate::config::WordCountBounds;
use crate::model::WordCount;
use crate::presenter::View;

const STYLE: &str = r#"<style>
body { background-color: #f8f9fa; font-family: 'Helvetica Neue', sans-serif; margin: 0; }
.app { max-width: 1200px; margin: 0 auto; padding: 24px; }
h1 { color: #ff6b6b; text-align: center; padding-bottom: 20px; border-bottom: 2px solid #ff6b6b; }
.subtitle { text-align: center; color: #555; }
.columns { display: grid; grid-template-columns: 1fr 2fr; gap: 48px; }
.info { background-color: #e7f3fe; color: #0c5460; padding: 12px; border-radius: 10px; }
.caption { color: #888; font-size: 0.85em; }
input[type=text] { width: 100%; padding: 8px; border-radius: 10px; border: 1px solid #ccc; box-sizing: border-box; }
input[type=range] { width: 100%; }
button { background-color: #ff6b6b; color: white; border-radius: 20px; padding: 10px 24px; border: none; font-weight: bold; width: 100%; transition: all 0.3s ease; cursor: pointer; }
button:hover { background-color: #ff4757; transform: scale(1.02); }
.recipe-card { background-color: white; padding: 30px; border-radius: 15px; box-shadow: 0 4px 6px rgba(0,0,0,0.1); border-left: 5px solid #ff6b6b; }
.recipe-card h1 { text-align: left; border-bottom: none; padding-bottom: 0; }
.joke-box { background-color: #fff3cd; color: #856404; padding: 15px; border-radius: 10px; border: 1px solid #ffeeba; margin-bottom: 20px; text-align: center; font-style: italic; }
.notice { padding: 12px; border-radius: 10px; margin: 16px 0; }
.notice.success { background-color: #d4edda; color: #155724; }
.notice.warning { background-color: #fff3cd; color: #856404; }
.notice.error { background-color: #f8d7da; color: #721c24; }
.download { display: inline-block; background-color: #ff6b6b; color: white; border-radius: 20px; padding: 10px 24px; text-decoration: none; font-weight: bold; }
.ready { text-align: center; padding: 50px; color: #888; }
.ready .emoji { font-size: 50px; }
</style>"#;

/// Everything up to and including the opening of the output column.
pub fn page_head(bounds: &WordCountBounds, model: &str, topic: &str, word_count: i64) -> String {
    let word_count = WordCount::clamped(word_count, bounds).get();
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Flavor Fusion</title>
{style}
</head>
<body>
<div class="app">
<h1>🍲 Flavor Fusion</h1>
<h3 class="subtitle">AI-Driven Recipe Blogging</h3>
<hr>
<div class="columns">
<div class="col-config">
<h3>🍳 Configuration</h3>
<p class="info">Customize your recipe request below.</p>
<form method="post" action="/generate">
<label for="topic">📝 Recipe Topic</label>
<input type="text" id="topic" name="topic" placeholder="e.g., Vegan Chocolate Cake" value="{topic}">
<label for="word_count">📏 Desired Word Count: <output id="word_count_value">{word_count}</output></label>
<input type="range" id="word_count" name="word_count" min="{min}" max="{max}" step="{step}" value="{word_count}" oninput="word_count_value.value = this.value">
<h3>🤖 Model Settings</h3>
<p class="caption">Using {model} for fast generation.</p>
<button type="submit">✨ Generate Recipe</button>
</form>
</div>
<div class="col-output">
"#,
        style = STYLE,
        topic = encode_double_quoted_attribute(topic),
        word_count = word_count,
        min = bounds.min,
        max = bounds.max,
        step = bounds.step,
        model = encode_text(model),
    )
}

pub fn page_tail() -> &'static str {
    "</div>\n</div>\n</div>\n</body>\n</html>\n"
}

/// Call-to-action shown before anything has been generated.
pub fn idle_panel() -> &'static str {
    r#"<div class="ready">
<h3>👈 Ready to cook?</h3>
<p>Enter a topic in the sidebar and hit Generate!</p>
<div class="emoji">🥗 🍕 🍰 🌮</div>
</div>
"#
}

/// Renders generated Markdown. Raw HTML in the model output is shown as text
/// and script or data URLs in links are replaced with `#`.
pub fn render_markdown(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
    let events = Parser::new_ext(markdown, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) if is_script_url(&dest_url) => Event::Start(Tag::Link {
            link_type,
            dest_url: CowStr::Borrowed("#"),
            title,
            id,
        }),
        other => other,
    });

    let mut rendered = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut rendered, events);
    rendered
}

fn is_script_url(url: &str) -> bool {
    let url = url.trim_start().to_ascii_lowercase();
    url.starts_with("javascript:") || url.starts_with("vbscript:") || url.starts_with("data:")
}

pub fn render_view(view: &View) -> String {
    match view {
        View::Warning { message } => format!(
            "<div class=\"notice warning\">⚠️ {}</div>\n",
            encode_text(message)
        ),
        View::Pending { joke } => format!(
            "<div id=\"joke-box\" class=\"joke-box\">😄 <b>Programmer Joke:</b><br>{}</div>\n\
             <p id=\"spinner\">👨‍🍳 Chef AI is cooking up your blog post...</p>\n",
            encode_text(joke)
        ),
        // Styles in the body apply to elements already rendered.
        View::ClearPending => {
            "<style>#joke-box, #spinner { display: none; }</style>\n".to_string()
        }
        View::Success {
            content,
            notice,
            download,
        } => format!(
            "<div class=\"recipe-card\">{content}</div>\n\
             <div class=\"notice success\">🎉 {notice}</div>\n\
             <a class=\"download\" download=\"{file_name}\" href=\"{href}\" \
             title=\"Save this recipe to your computer\">📥 Download Recipe</a>\n",
            content = render_markdown(content),
            notice = encode_text(notice),
            file_name = encode_double_quoted_attribute(&download.file_name),
            href = download.data_url(),
        ),
        View::Failure { message } => format!(
            "<div class=\"notice error\">😕 {}</div>\n",
            encode_text(message)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::download::DownloadArtifact;

    #[test]
    fn test_head_prefills_and_escapes_inputs() {
        let bounds = WordCountBounds::default();
        let head = page_head(&bounds, "gemini-flash-latest", "Mac \"n\" <Cheese>", 9000);
        assert!(head.contains(r#"value="Mac &quot;n&quot; &lt;Cheese&gt;""#));
        assert!(head.contains(r#"min="100" max="2000" step="50" value="2000""#));
        assert!(head.contains("Using gemini-flash-latest for fast generation."));
        assert!(!head.contains("<Cheese>"));
    }

    #[test]
    fn test_success_view_escapes_content() {
        let view = View::Success {
            content: "# Toast <script>alert(1)</script>".to_string(),
            notice: "Recipe generated successfully!",
            download: DownloadArtifact::for_recipe("Toast", "# Toast"),
        };
        let html = render_view(&view);
        assert!(html.contains("<h1>Toast &lt;script&gt;alert(1)&lt;/script&gt;</h1>"));
        assert!(!html.contains("<script>"));
        assert!(html.contains(r#"download="toast_recipe.md""#));
        assert!(html.contains("data:text/markdown;charset=utf-8;base64,"));
    }

    #[test]
    fn test_head_survives_inverted_bounds() {
        let bounds = WordCountBounds {
            min: 2000,
            max: 100,
            step: 50,
            default: 500,
        };
        let head = page_head(&bounds, "gemini-flash-latest", "Pho", 500);
        assert!(head.contains(r#"value="500""#));
    }

    #[test]
    fn test_markdown_is_rendered() {
        let html = render_markdown("# Go Bananas Bread\n\n- 3 ripe bananas\n\n**Bake** it.");
        assert!(html.contains("<h1>Go Bananas Bread</h1>"));
        assert!(html.contains("<li>3 ripe bananas</li>"));
        assert!(html.contains("<strong>Bake</strong>"));
        assert!(!html.contains("# Go"));
    }

    #[test]
    fn test_markdown_neutralizes_raw_html_and_script_links() {
        let html = render_markdown(
            "<div onclick=\"x()\">hi</div>\n\n[click](javascript:alert(1)) <img src=x onerror=y>",
        );
        assert!(!html.contains("<div"));
        assert!(!html.contains("<img"));
        assert!(!html.contains("javascript:"));
        assert!(html.contains("&lt;div"));
        assert!(html.contains(r##"<a href="#">click</a>"##));
    }

    #[test]
    fn test_clear_pending_hides_joke() {
        let html = render_view(&View::ClearPending);
        assert!(html.contains("#joke-box"));
        assert!(html.contains("display: none"));
    }
}
