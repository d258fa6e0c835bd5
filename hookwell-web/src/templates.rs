//! HTML views, registered as raw tera templates at startup.

use tera::Tera;

const BASE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>{% block title %}Hookwell{% endblock title %}</title>
  <link rel="stylesheet" href="/static/style.css">
</head>
<body>
  <header>
    <h1><a href="/">Hookwell</a></h1>
    <p class="subtitle">Webhook receiver &amp; inspector</p>
  </header>
  <main>
{% block content %}{% endblock content %}
  </main>
</body>
</html>
"#;

const INDEX: &str = r#"{% extends "base.html" %}
{% block title %}Hookwell — recent webhooks{% endblock title %}
{% block content %}
  <p class="summary">{{ total }} webhook{{ total | pluralize }} received</p>
  {% if entries | length == 0 %}
  <p class="empty">Nothing captured yet. Point a sender at <code>POST /webhook</code>.</p>
  {% else %}
  <table>
    <thead>
      <tr>
        <th>Received</th>
        <th>Method</th>
        <th>Path</th>
        <th>Client</th>
        <th>User agent</th>
        <th></th>
      </tr>
    </thead>
    <tbody>
      {% for entry in entries %}
      <tr>
        <td>{{ entry.received_at }}</td>
        <td><code>{{ entry.method }}</code></td>
        <td><code>{{ entry.path }}</code></td>
        <td>{% if entry.client_ip %}{{ entry.client_ip }}{% else %}unknown{% endif %}</td>
        <td>{% if entry.user_agent %}{{ entry.user_agent }}{% else %}&mdash;{% endif %}</td>
        <td><a href="/webhooks/{{ entry.id }}">details</a></td>
      </tr>
      {% endfor %}
    </tbody>
  </table>
  {% endif %}
  <nav class="pager">
    {% if has_prev %}<a href="/?page={{ page - 1 }}&amp;per_page={{ per_page }}">&laquo; newer</a>{% endif %}
    <span>page {{ page }}</span>
    {% if has_next %}<a href="/?page={{ page + 1 }}&amp;per_page={{ per_page }}">older &raquo;</a>{% endif %}
  </nav>
{% endblock content %}
"#;

const DETAIL: &str = r#"{% extends "base.html" %}
{% block title %}Webhook {{ entry.id }}{% endblock title %}
{% block content %}
  <h2>Webhook <code>{{ entry.id }}</code></h2>
  <dl>
    <dt>Received</dt><dd>{{ entry.received_at }}</dd>
    <dt>Method</dt><dd><code>{{ entry.method }}</code></dd>
    <dt>Path</dt><dd><code>{{ entry.path }}</code></dd>
    <dt>Client IP</dt><dd>{% if entry.client_ip %}{{ entry.client_ip }}{% else %}unknown{% endif %}</dd>
    <dt>User agent</dt><dd>{% if entry.user_agent %}{{ entry.user_agent }}{% else %}&mdash;{% endif %}</dd>
  </dl>
  <h3>Headers</h3>
  <table>
    <tbody>
      {% for name, value in entry.headers %}
      <tr><th>{{ name }}</th><td>{{ value }}</td></tr>
      {% endfor %}
    </tbody>
  </table>
  <h3>Body</h3>
  <pre>{{ pretty_body }}</pre>
{% endblock content %}
"#;

/// Register all templates. Called once at startup.
pub fn build() -> tera::Result<Tera> {
    let mut tera = Tera::default();
    tera.add_raw_template("base.html", BASE)?;
    tera.add_raw_template("index.html", INDEX)?;
    tera.add_raw_template("detail.html", DETAIL)?;
    Ok(tera)
}
