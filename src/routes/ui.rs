use axum::{response::Html, Router, routing::get};

pub fn router() -> Router {
    Router::new().route("/", get(index))
}

async fn index() -> Html<&'static str> {
    Html(r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>General arXiv Paper Search</title>
  <style>
    body { font-family: Arial, sans-serif; margin: 2rem auto; max-width: 56rem; color: #1d1d1f; }
    h1 { margin-bottom: 0.5rem; }
    .card { border: 1px solid #ddd; padding: 1rem; border-radius: 8px; margin-bottom: 1rem; }
    label { display: block; margin-bottom: 0.5rem; font-weight: 600; }
    input { width: 100%; padding: 0.5rem; box-sizing: border-box; }
    button { margin-top: 1rem; padding: 0.6rem 1rem; }
    #output { line-height: 1.5; }
    #output hr { border: 0; border-top: 1px solid #ddd; margin: 1.5rem 0; }
  </style>
</head>
<body>
  <h1>General arXiv Paper Search</h1>
  <p>Enter any research topic, keywords, or even a paper title to search arXiv. Get instant access
  to academic papers from fields like physics, mathematics, computer science, quantitative biology,
  quantitative finance, statistics, electrical engineering and systems science, and economics.</p>

  <div class="card">
    <form id="searchForm">
      <label for="query">Enter your research topic or keywords</label>
      <input id="query" name="query" autocomplete="off" />
      <button id="searchBtn" type="submit">Search</button>
    </form>
  </div>

  <div class="card">
    <h2>Search Results</h2>
    <div id="output"></div>
  </div>

  <script>
    const form = document.getElementById('searchForm');
    const searchBtn = document.getElementById('searchBtn');
    const output = document.getElementById('output');

    form.addEventListener('submit', async (event) => {
      event.preventDefault();
      if (searchBtn.disabled) {
        return;
      }
      searchBtn.disabled = true;
      output.textContent = 'Searching...';
      try {
        const res = await fetch('/api/search', {
          method: 'POST',
          headers: { 'Content-Type': 'application/json' },
          body: JSON.stringify({ query: document.getElementById('query').value })
        });
        const json = await res.json();
        output.innerHTML = json.html;
      } catch (err) {
        output.textContent = 'Could not reach the search service.';
      } finally {
        searchBtn.disabled = false;
      }
    });
  </script>
</body>
</html>"#)
}
