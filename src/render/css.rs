use crate::models::Theme;
use crate::theme::generate_css_variables;

/// Theme-independent rules. Every colour, font and size refers to the
/// custom properties emitted by [`generate_css_variables`].
const BASE_CSS: &str = r#"*, *::before, *::after { box-sizing: border-box; }
html, body { margin: 0; padding: 0; }
img, iframe, video { max-width: 100%; display: block; }
button, input, select, textarea { font: inherit; }
body {
  font-family: var(--font-family);
  font-size: var(--font-size-base);
  font-weight: var(--font-weight-normal);
  line-height: var(--line-height);
  color: var(--color-text);
  background: var(--color-background);
}
h1, h2, h3, h4, h5, h6 {
  font-family: var(--font-family-heading);
  font-weight: var(--font-weight-bold);
  line-height: var(--line-height-heading);
  margin: 0 0 var(--spacing-md);
}
h1 { font-size: 2.75rem; }
h2 { font-size: 2.125rem; }
h3 { font-size: 1.75rem; }
h4 { font-size: 1.375rem; }
h5 { font-size: 1.125rem; }
h6 { font-size: 1rem; }
p { margin: 0 0 var(--spacing-md); }
a { color: var(--color-primary); }
.site-nav { background: var(--color-background); border-bottom: 1px solid var(--color-border); position: relative; z-index: 10; }
.site-nav-sticky { position: sticky; top: 0; }
.nav-inner { max-width: 1200px; margin: 0 auto; padding: var(--spacing-md) var(--spacing-lg); display: flex; align-items: center; gap: var(--spacing-lg); }
.nav-brand { font-family: var(--font-family-heading); font-weight: var(--font-weight-bold); font-size: 1.25rem; color: var(--color-text); text-decoration: none; margin-right: auto; }
.nav-brand img { max-height: 40px; }
.nav-toggle { display: none; background: none; border: 1px solid var(--color-border); border-radius: var(--radius-sm); padding: var(--spacing-xs) var(--spacing-sm); cursor: pointer; color: var(--color-text); }
.nav-links { list-style: none; margin: 0; padding: 0; display: flex; gap: var(--spacing-lg); }
.nav-item { position: relative; }
.nav-item > a { color: var(--color-text); text-decoration: none; font-weight: var(--font-weight-medium); }
.nav-item.active > a, .nav-item > a:hover { color: var(--color-primary); }
.nav-dropdown { display: none; position: absolute; top: 100%; left: 0; min-width: 200px; list-style: none; margin: 0; padding: var(--spacing-sm) 0; background: var(--color-background); border: 1px solid var(--color-border); border-radius: var(--radius-md); box-shadow: var(--shadow-md); }
.nav-dropdown a { display: block; padding: var(--spacing-xs) var(--spacing-md); color: var(--color-text); text-decoration: none; }
.has-dropdown:hover > .nav-dropdown, .has-dropdown:focus-within > .nav-dropdown { display: block; }
.section { width: 100%; background-size: cover; background-position: center; }
.section-inner { margin: 0 auto; width: 100%; }
.component { margin-bottom: var(--spacing-lg); }
.component:last-child { margin-bottom: 0; }
.btn { display: inline-block; padding: var(--spacing-sm) var(--spacing-lg); border-radius: var(--radius-md); font-weight: var(--font-weight-medium); text-decoration: none; border: 2px solid transparent; cursor: pointer; }
.btn-primary { background: var(--color-primary); color: #fff; }
.btn-secondary { background: var(--color-secondary); color: #fff; }
.btn-outline { background: transparent; border-color: var(--color-primary); color: var(--color-primary); }
.btn-sm { padding: var(--spacing-xs) var(--spacing-md); font-size: 0.875rem; }
.btn-lg { padding: var(--spacing-md) var(--spacing-xl); font-size: 1.125rem; }
.btn-block { display: block; width: 100%; text-align: center; }
.component-image img { border-radius: var(--radius-md); height: auto; }
.component-image figcaption { color: var(--color-text-muted); font-size: 0.875rem; margin-top: var(--spacing-sm); }
.image-placeholder { background: var(--color-surface); border: 1px dashed var(--color-border); border-radius: var(--radius-md); padding: var(--spacing-xl); text-align: center; color: var(--color-text-muted); }
.stats-grid, .gallery-grid { display: grid; grid-template-columns: repeat(var(--columns, 3), minmax(0, 1fr)); gap: var(--spacing-lg); }
.stat { text-align: center; }
.stat-value { font-family: var(--font-family-heading); font-size: 2.5rem; font-weight: var(--font-weight-bold); color: var(--color-primary); }
.stat-label { color: var(--color-text-muted); }
.component-testimonial { margin: 0 0 var(--spacing-lg); padding: var(--spacing-xl); background: var(--color-surface); border-radius: var(--radius-lg); box-shadow: var(--shadow-sm); }
.testimonial-rating { color: var(--color-warning); letter-spacing: 2px; }
.testimonial-quote { font-size: 1.125rem; font-style: italic; }
.testimonial-author { display: flex; align-items: center; gap: var(--spacing-sm); }
.testimonial-author img { width: 48px; height: 48px; border-radius: var(--radius-full); object-fit: cover; }
.testimonial-role { color: var(--color-text-muted); font-size: 0.875rem; }
.gallery-item { margin: 0; }
.gallery-item img { width: 100%; height: 100%; object-fit: cover; border-radius: var(--radius-md); }
.video-embed { position: relative; padding-bottom: 56.25%; height: 0; overflow: hidden; border-radius: var(--radius-md); }
.video-embed iframe { position: absolute; top: 0; left: 0; width: 100%; height: 100%; border: 0; }
.site-form { display: flex; flex-direction: column; gap: var(--spacing-md); max-width: 640px; }
.site-form label { display: flex; flex-direction: column; gap: var(--spacing-xs); font-weight: var(--font-weight-medium); }
.site-form input, .site-form textarea { padding: var(--spacing-sm) var(--spacing-md); border: 1px solid var(--color-border); border-radius: var(--radius-sm); background: var(--color-background); color: var(--color-text); }
.form-inline { display: flex; gap: var(--spacing-sm); }
.form-inline input { flex: 1; }
.donation-amounts { display: flex; flex-wrap: wrap; gap: var(--spacing-sm); border: 0; padding: 0; margin: 0; }
.donation-amount { flex-direction: row !important; align-items: center; padding: var(--spacing-sm) var(--spacing-md); border: 1px solid var(--color-border); border-radius: var(--radius-md); }
.social-links { list-style: none; margin: 0; padding: 0; display: flex; flex-wrap: wrap; gap: var(--spacing-md); }
.social-link { text-decoration: none; font-weight: var(--font-weight-medium); }
.site-footer { background: var(--color-surface); border-top: 1px solid var(--color-border); color: var(--color-text-muted); }
.footer-inner { max-width: 1200px; margin: 0 auto; padding: var(--spacing-xxl) var(--spacing-lg); display: flex; flex-direction: column; gap: var(--spacing-xl); }
.footer-columns { display: grid; grid-template-columns: repeat(auto-fit, minmax(180px, 1fr)); gap: var(--spacing-xl); }
.footer-column h4 { color: var(--color-text); font-size: 1rem; }
.footer-column ul { list-style: none; margin: 0; padding: 0; }
.footer-column a { color: var(--color-text-muted); text-decoration: none; line-height: 2; }
.footer-copyright { font-size: 0.875rem; margin: 0; }
@media (max-width: 768px) {
  .nav-inner { flex-wrap: wrap; }
  .nav-toggle { display: block; }
  .nav-links, .nav-cta { display: none; width: 100%; }
  .site-nav.nav-open .nav-links { display: flex; flex-direction: column; gap: var(--spacing-sm); }
  .site-nav.nav-open .nav-cta { display: inline-block; }
  .nav-dropdown { position: static; display: block; border: 0; box-shadow: none; padding-left: var(--spacing-md); }
  .stats-grid, .gallery-grid { grid-template-columns: repeat(2, minmax(0, 1fr)); }
  h1 { font-size: 2.25rem; }
  h2 { font-size: 1.75rem; }
}
@media (max-width: 480px) {
  .stats-grid, .gallery-grid { grid-template-columns: minmax(0, 1fr); }
  .form-inline { flex-direction: column; }
  .nav-inner { padding: var(--spacing-sm) var(--spacing-md); }
  h1 { font-size: 1.875rem; }
}
"#;

/// The stylesheet for every page of a site: theme variables followed by
/// the reset, typography and layout rules.
pub fn generate_css(theme: &Theme) -> String {
    let variables = generate_css_variables(theme);
    let mut css = String::with_capacity(variables.len() + BASE_CSS.len());
    css.push_str(&variables);
    css.push_str(BASE_CSS);
    css
}
