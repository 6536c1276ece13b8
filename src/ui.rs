use crate::models::{Platform, ScheduledPost};
use crate::scheduler::{format_scheduled_date, DraftForm, Notice, Phase, Severity};
use crate::stats::DashboardSummary;

pub fn render_dashboard(summary: &DashboardSummary, updated: &str) -> String {
    let cards: String = summary
        .platforms
        .iter()
        .map(|p| {
            format!(
                r#"<div class="card"><h3>{}</h3><p class="value">{}</p><p class="hint">{:.1}% engagement &middot; {} posts</p></div>"#,
                p.label,
                group_thousands(p.followers),
                p.engagement,
                group_thousands(p.posts)
            )
        })
        .collect();

    let highest = summary
        .highest_engagement
        .as_ref()
        .map(|h| format!("{} ({:.1}%)", h.platform.label(), h.engagement))
        .unwrap_or_else(|| "&ndash;".to_string());

    let body = DASHBOARD_HTML
        .replace("{{UPDATED}}", &escape_html(updated))
        .replace("{{TOTAL_FOLLOWERS}}", &group_thousands(summary.total_followers))
        .replace("{{TOTAL_ENGAGEMENT}}", &format!("{:.1}", summary.total_engagement))
        .replace("{{TOTAL_POSTS}}", &group_thousands(summary.total_posts))
        .replace("{{HIGHEST}}", &highest)
        .replace("{{CARDS}}", &cards);
    page("Social Media Dashboard", &body)
}

pub fn render_scheduler(
    posts: &[ScheduledPost],
    draft: &DraftForm,
    phase: Phase,
    notice: Option<&Notice>,
    load_error: Option<&str>,
) -> String {
    let mut notice_html = notice
        .map(|n| {
            let class = match n.severity {
                Severity::Success => "notice success",
                Severity::Error => "notice error",
            };
            format!(r#"<p class="{class}">{}</p>"#, escape_html(&n.message))
        })
        .unwrap_or_default();
    match phase {
        Phase::Idle => {}
        Phase::Submitting => notice_html.push_str(r#"<p class="hint">Scheduling post&hellip;</p>"#),
        Phase::Deleting => notice_html.push_str(r#"<p class="hint">Deleting post&hellip;</p>"#),
    }

    let list_html = match load_error {
        Some(err) => format!(r#"<p class="notice error">{}</p>"#, escape_html(err)),
        None if posts.is_empty() => r#"<p class="hint">No scheduled posts yet.</p>"#.to_string(),
        None => {
            let items: String = posts.iter().map(render_post).collect();
            format!("<ul class=\"posts\">{items}</ul>")
        }
    };

    let options: String = Platform::ALL
        .into_iter()
        .map(|platform| {
            let selected = if draft.platform.eq_ignore_ascii_case(platform.key()) {
                " selected"
            } else {
                ""
            };
            format!(
                r#"<option value="{}"{selected}>{}</option>"#,
                platform.key(),
                platform.label()
            )
        })
        .collect();

    let body = SCHEDULER_HTML
        .replace("{{NOTICE}}", &notice_html)
        .replace("{{OPTIONS}}", &options)
        .replace("{{CONTENT}}", &escape_html(&draft.content))
        .replace("{{DATE}}", &escape_html(&draft.scheduled_date))
        .replace("{{IMAGE}}", &escape_html(&draft.image))
        .replace("{{POSTS}}", &list_html);
    page("Content Scheduler", &body)
}

fn render_post(post: &ScheduledPost) -> String {
    let image = post
        .image
        .as_deref()
        .map(|url| format!(r#" &middot; <a href="{0}">image</a>"#, escape_html(url)))
        .unwrap_or_default();
    format!(
        r#"<li><div><strong>{}</strong> &middot; {}{}<p>{}</p></div><form method="post" action="/scheduler/{}/delete"><button type="submit">Delete</button></form></li>"#,
        post.platform.label(),
        escape_html(&format_scheduled_date(&post.scheduled_date)),
        image,
        escape_html(&post.content),
        escape_html(&post.id.to_string()),
    )
}

fn page(title: &str, body: &str) -> String {
    LAYOUT_HTML.replace("{{TITLE}}", title).replace("{{BODY}}", body)
}

fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

const LAYOUT_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{TITLE}}</title>
  <style>
    :root {
      --bg: #f4f6fb;
      --ink: #1f2433;
      --accent: #4f46e5;
      --ok: #15803d;
      --bad: #b91c1c;
      --card: #ffffff;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      background: var(--bg);
      color: var(--ink);
      font-family: "Inter", "Segoe UI", sans-serif;
    }

    nav {
      display: flex;
      gap: 20px;
      padding: 16px 32px;
      background: var(--ink);
    }

    nav a {
      color: #fff;
      text-decoration: none;
      font-weight: 600;
    }

    main {
      width: min(980px, 100%);
      margin: 0 auto;
      padding: 32px 18px;
      display: grid;
      gap: 24px;
    }

    .grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
      gap: 16px;
    }

    .card {
      background: var(--card);
      border-radius: 16px;
      padding: 20px;
      box-shadow: 0 8px 24px rgba(31, 36, 51, 0.08);
    }

    .value {
      font-size: 2rem;
      font-weight: 700;
      margin: 8px 0;
    }

    .hint {
      color: #6b7280;
      margin: 0;
    }

    .notice {
      padding: 12px 16px;
      border-radius: 10px;
      color: #fff;
    }

    .notice.success {
      background: var(--ok);
    }

    .notice.error {
      background: var(--bad);
    }

    form.draft {
      display: grid;
      gap: 12px;
    }

    input, select, textarea {
      font: inherit;
      padding: 10px;
      border-radius: 8px;
      border: 1px solid #d1d5db;
    }

    button {
      font: inherit;
      padding: 10px 18px;
      border: 0;
      border-radius: 8px;
      background: var(--accent);
      color: #fff;
      cursor: pointer;
    }

    .posts {
      list-style: none;
      padding: 0;
      display: grid;
      gap: 12px;
    }

    .posts li {
      display: flex;
      justify-content: space-between;
      align-items: center;
      gap: 16px;
    }
  </style>
</head>
<body>
  <nav>
    <a href="/">Dashboard</a>
    <a href="/scheduler">Scheduler</a>
  </nav>
  <main>
{{BODY}}
  </main>
</body>
</html>
"#;

const DASHBOARD_HTML: &str = r#"    <header>
      <h1>Social Media Dashboard</h1>
      <p class="hint">Overview of your social media performance across platforms &middot; last updated {{UPDATED}}</p>
    </header>
    <section class="grid">
      <div class="card"><h3>Total Followers</h3><p class="value">{{TOTAL_FOLLOWERS}}</p></div>
      <div class="card"><h3>Engagement Rate</h3><p class="value">{{TOTAL_ENGAGEMENT}}%</p></div>
      <div class="card"><h3>Total Posts</h3><p class="value">{{TOTAL_POSTS}}</p></div>
      <div class="card"><h3>Top Engagement</h3><p class="value">{{HIGHEST}}</p></div>
    </section>
    <section class="grid">
      {{CARDS}}
    </section>"#;

const SCHEDULER_HTML: &str = r#"    <header>
      <h1>Content Scheduler</h1>
      <p class="hint">Schedule and manage your social media posts across platforms</p>
    </header>
    {{NOTICE}}
    <section class="card">
      <h2>Create New Post</h2>
      <form class="draft" method="post" action="/scheduler">
        <select name="platform" required>
          <option value="">Platform</option>
          {{OPTIONS}}
        </select>
        <textarea name="content" rows="4" placeholder="Post content" required>{{CONTENT}}</textarea>
        <input type="datetime-local" name="scheduledDate" value="{{DATE}}" required />
        <input type="url" name="image" placeholder="Image URL (optional)" value="{{IMAGE}}" />
        <button type="submit">Schedule Post</button>
      </form>
    </section>
    <section class="card">
      <h2>Scheduled Posts</h2>
      {{POSTS}}
    </section>"#;
