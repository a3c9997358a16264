//! Inline stylesheet shared by the live page and the static export.

pub const STYLESHEET: &str = r#"
body {background:#05060a;margin:0;font-family:'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;color:#f5f7ff;}
.app-shell {min-height:100vh;padding:32px 32px 90px;box-sizing:border-box;background:radial-gradient(circle at top,#10121c,#05060a 60%);}
.hero {display:flex;justify-content:space-between;align-items:flex-end;gap:24px;margin-bottom:32px;border-bottom:1px solid rgba(255,255,255,0.08);padding-bottom:24px;}
.hero-title {font-family:'Space Grotesk', sans-serif;font-size:44px;margin:4px 0;color:#f8f9ff;}
.hero-subtitle {color:#cfd2ff;font-size:16px;max-width:520px;}
.eyebrow {text-transform:uppercase;letter-spacing:0.3em;font-size:12px;color:#a3a7d1;}
.selectors {display:flex;gap:16px;flex-wrap:wrap;align-items:flex-end;}
.field-label {display:block;margin-bottom:8px;color:#9ba1c5;font-size:13px;text-transform:uppercase;letter-spacing:0.14em;}
select {padding:12px 16px;border-radius:12px;border:1px solid rgba(255,255,255,0.12);font-size:16px;background:#0f111a;color:#f8f9ff;min-width:260px;}
.apply-button {padding:12px 16px;border-radius:12px;border:1px solid rgba(255,255,255,0.12);background:#1b1f33;color:#f8f9ff;}
.layout-grid {display:flex;gap:24px;}
.column {display:flex;flex-direction:column;gap:20px;min-width:0;}
.left {flex:5;}
.right {flex:7;}
.section-card {background:#0e111a;border:1px solid rgba(255,255,255,0.05);border-radius:16px;padding:20px;}
.section-title {font-size:15px;text-transform:uppercase;letter-spacing:0.2em;color:#7e85b5;margin-bottom:16px;}
.subheading {font-size:13px;text-transform:uppercase;letter-spacing:0.14em;color:#9ba1c5;margin:18px 0 10px;}
.stat-grid {display:grid;grid-template-columns:repeat(auto-fit,minmax(180px,1fr));gap:16px;}
.stat-card {padding:18px;border:1px solid rgba(255,255,255,0.08);border-radius:16px;background:rgba(255,255,255,0.02);}
.stat-label {font-size:12px;text-transform:uppercase;letter-spacing:0.16em;color:#8f93b8;margin-bottom:6px;}
.stat-value {font-size:20px;font-weight:600;color:#f8f9ff;}
.bullets {padding-left:20px;margin:0;display:flex;flex-direction:column;gap:8px;color:#e4e6ff;}
.bullets li {line-height:1.4;}
.tech-grid {display:grid;grid-template-columns:repeat(auto-fit,minmax(160px,1fr));gap:14px;}
.tech-card {padding:16px;border-radius:14px;background:rgba(255,255,255,0.04);border:1px solid rgba(255,255,255,0.04);}
.tech-label {font-size:13px;font-weight:500;color:#b2b7e4;margin-bottom:8px;}
.tech-value {font-size:15px;color:#f7f8ff;line-height:1.4;}
.persona-grid {display:grid;grid-template-columns:repeat(auto-fit,minmax(240px,1fr));gap:16px;}
.persona-card {padding:18px;border-radius:18px;background:rgba(23,25,45,0.9);border:1px solid rgba(255,255,255,0.05);}
.persona-name {font-size:18px;font-weight:600;color:#fff;margin-bottom:4px;}
.persona-title {font-size:14px;color:#9ba1c5;margin-bottom:10px;}
.persona-bio {margin:0;color:#d8dbff;line-height:1.5;font-size:14px;}
.snippet-grid {display:grid;grid-template-columns:repeat(auto-fit,minmax(240px,1fr));gap:14px;}
.snippet-card {padding:16px;border-radius:14px;background:rgba(255,255,255,0.03);border:1px solid rgba(255,255,255,0.05);}
.snippet-title {font-size:15px;font-weight:600;margin-bottom:8px;color:#fdfdff;}
.snippet-body {margin:0;color:#d5d8ff;font-size:14px;line-height:1.5;min-height:72px;}
.snippet-source {margin-top:12px;font-size:12px;color:#8a8fb4;}
.intel-headline {font-size:20px;font-weight:600;color:#fff;margin-bottom:8px;}
.intel-why {color:#d8dbff;line-height:1.5;}
.signal-stack {list-style:none;padding:0;margin:0;display:flex;flex-direction:column;gap:10px;}
.signal-stack li {display:flex;gap:12px;align-items:center;}
.chip {display:inline-flex;align-items:center;gap:8px;background:rgba(255,255,255,0.04);border:1px solid rgba(255,255,255,0.07);border-radius:999px;padding:8px 16px;font-size:13px;font-weight:600;}
.signal-detail {color:#d5d8ff;font-size:14px;}
.talktrack-grid, .cta-grid {display:grid;grid-template-columns:repeat(auto-fit,minmax(220px,1fr));gap:14px;}
.talktrack-card, .cta-card {padding:16px;border-radius:14px;background:rgba(255,255,255,0.03);border:1px solid rgba(255,255,255,0.05);}
.talktrack-title, .cta-label {font-size:15px;font-weight:600;margin-bottom:8px;color:#fdfdff;}
.overlay-tag {margin-top:10px;font-size:12px;color:#c5c8f2;}
.cta-copy {margin:0 0 8px;color:#d5d8ff;font-size:14px;}
.cta-asset {font-size:12px;color:#8a8fb4;}
.producer-notes, .fallback-line {color:#d8dbff;line-height:1.5;}
.script-table {display:flex;flex-direction:column;gap:8px;}
.script-row {display:grid;grid-template-columns:80px 1fr 140px;gap:12px;padding:10px 12px;border-radius:10px;background:rgba(255,255,255,0.02);}
.script-timestamp {font-family:'Space Grotesk', monospace;color:#a3a7d1;}
.script-delivery {font-size:12px;color:#8a8fb4;text-align:right;}
@media(max-width:1024px){.hero{flex-direction:column;align-items:flex-start;}.layout-grid{flex-direction:column;}}
"#;
