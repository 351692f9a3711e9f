//! Baseline stylesheet.
//!
//! Only what the animation primitives and the printed A4 page depend on.

/// Inline stylesheet for the composed page.
pub const BASE_CSS: &str = r"
*,*::before,*::after{box-sizing:border-box}
html{scroll-behavior:smooth}
body{margin:0;font-family:system-ui,-apple-system,'Segoe UI',sans-serif;line-height:1.6;color:#1f2933;background:#fafbfc}
.scroll-progress{position:fixed;top:0;left:0;height:3px;width:0;background:#3b82f6;z-index:20}
.site-header{position:sticky;top:0;display:flex;justify-content:space-between;align-items:center;padding:1rem 2rem;background:transparent;transition:background .3s,padding .3s;z-index:10}
.site-header.condensed{background:rgba(255,255,255,.92);padding:.5rem 2rem;box-shadow:0 1px 4px rgba(0,0,0,.08)}
.site-header nav a{margin-left:1.25rem;color:inherit;text-decoration:none}
.brand{font-weight:700;color:inherit;text-decoration:none}
.hero{position:relative;min-height:90vh;display:flex;flex-direction:column;justify-content:center;padding:4rem 2rem;overflow:hidden}
.hero-backdrop{position:absolute;inset:-10%;background:radial-gradient(circle at 30% 30%,rgba(59,130,246,.18),transparent 60%);will-change:transform;z-index:-1}
.monogram{font-size:1.25rem;font-weight:700;letter-spacing:.2em;color:#3b82f6}
.hero h1{font-size:3rem;margin:.25rem 0}
.tagline{font-size:1.25rem;min-height:2rem}
.caret{display:inline-block;margin-left:2px;color:#3b82f6}
.roles{display:flex;gap:1rem;list-style:none;padding:0}
.section{max-width:960px;margin:0 auto;padding:4rem 2rem}
.stats{display:flex;gap:2rem;flex-wrap:wrap}
.stat-value{font-size:2.5rem;font-weight:700;font-variant-numeric:tabular-nums}
.stat-label{display:block;color:#52606d}
.skill-groups{display:grid;grid-template-columns:repeat(auto-fit,minmax(260px,1fr));gap:2rem}
.skill-group ul{list-style:none;padding:0}
.skill{display:grid;grid-template-columns:1fr auto;gap:.25rem;margin-bottom:.75rem}
.meter{grid-column:1/-1;height:6px;background:#e4e7eb;border-radius:3px;overflow:hidden}
.meter-fill{height:100%;background:#3b82f6;border-radius:3px}
.timeline{list-style:none;padding:0;border-left:2px solid #e4e7eb}
.timeline-item{padding:0 0 2rem 1.5rem}
.timeline-meta{display:flex;gap:1rem;color:#52606d;font-size:.9rem}
.company{color:#3b82f6;font-weight:400}
.contact-list{list-style:none;padding:0}
.site-footer{text-align:center;padding:2rem;color:#7b8794}
@page{size:A4;margin:0}
@media print{
  [data-motion]{opacity:1!important;transform:none!important;transition:none!important}
  .meter-fill{width:var(--level)!important;transition:none!important}
  .scroll-progress,.caret,.site-header{display:none!important}
  .hero{min-height:auto;padding:2rem}
  .section{padding:1.5rem 2rem;break-inside:avoid-page}
  body{background:#fff;-webkit-print-color-adjust:exact;print-color-adjust:exact}
}
@media (prefers-reduced-motion:reduce){
  [data-motion]{transition:none!important}
}
";
