//! Global CSS styles for Folio.
//!
//! Light theme on `.page-root`, dark overrides on `.page-root.dark`.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
.page-root {
  /* Surfaces */
  --paper: #fbfaf7;
  --surface: #ffffff;
  --border: #e4e1da;

  /* Text */
  --ink: #1f2430;
  --ink-muted: #5b6372;

  /* Accent */
  --accent: #2f6fed;
  --accent-soft: rgba(47, 111, 237, 0.12);
  --accent-warm: #e8833a;

  /* Overlay */
  --backdrop: rgba(10, 12, 18, 0.65);
  --shadow: 0 12px 40px rgba(15, 20, 30, 0.12);

  /* Typography */
  --font-sans: 'Inter', 'Segoe UI', system-ui, sans-serif;
  --font-display: 'Fraunces', Georgia, serif;

  /* Type Scale */
  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-lg: 1.125rem;
  --text-xl: 1.5rem;
  --text-2xl: 2rem;
  --text-3xl: 3rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-modal: 250ms ease;
  --transition-bar: 800ms cubic-bezier(0.4, 0, 0.2, 1);

  font-family: var(--font-sans);
  background: var(--paper);
  color: var(--ink);
  line-height: 1.65;
  min-height: 100vh;
  transition: background var(--transition-fast), color var(--transition-fast);
}

.page-root.dark {
  --paper: #10131a;
  --surface: #181c25;
  --border: #262b36;
  --ink: #e7e9ee;
  --ink-muted: #9aa3b2;
  --accent-soft: rgba(47, 111, 237, 0.22);
  --shadow: 0 12px 40px rgba(0, 0, 0, 0.45);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
}

a {
  color: var(--accent);
  text-decoration: none;
}

a:hover {
  text-decoration: underline;
}

/* === Layout === */
.page {
  max-width: 1040px;
  margin: 0 auto;
  padding: 0 1.5rem 4rem;
}

.section {
  padding: 4rem 0 1rem;
}

.section-header {
  font-family: var(--font-display);
  font-size: var(--text-2xl);
  font-weight: 600;
  margin-bottom: 1.5rem;
}

.body-text {
  font-size: var(--text-base);
  color: var(--ink-muted);
  max-width: 42rem;
}

/* === Reveal on scroll === */
[data-reveal-section] {
  opacity: 0;
  transform: translateY(24px);
  transition-property: opacity, transform;
  transition-timing-function: ease-out;
}

[data-reveal-section].revealed {
  opacity: 1;
  transform: none;
}

/* === Navigation === */
.nav-header {
  position: sticky;
  top: 0;
  z-index: 10;
  display: flex;
  align-items: center;
  justify-content: space-between;
  gap: 1rem;
  padding: 0.75rem 1.5rem;
  background: var(--paper);
  border-bottom: 1px solid var(--border);
}

.nav-brand {
  font-family: var(--font-display);
  font-size: var(--text-lg);
  font-weight: 600;
  color: var(--ink);
}

.nav-links {
  display: flex;
  gap: 1.25rem;
  font-size: var(--text-sm);
}

.nav-links a {
  color: var(--ink-muted);
}

.nav-links a:hover {
  color: var(--accent);
}

/* === Hero === */
.hero {
  padding: 6rem 0 2rem;
}

.hero-title {
  font-family: var(--font-display);
  font-size: var(--text-3xl);
  font-weight: 600;
  line-height: 1.15;
}

.hero-tagline {
  margin-top: 0.75rem;
  font-size: var(--text-xl);
  color: var(--ink-muted);
}

.hero-actions {
  display: flex;
  gap: 0.75rem;
  margin-top: 2rem;
}

/* === Buttons === */
.btn-primary,
.btn-ghost,
.btn-chip,
.btn-floating,
.icon-btn {
  font: inherit;
  cursor: pointer;
  border: 1px solid transparent;
  transition: background var(--transition-fast), color var(--transition-fast),
    border-color var(--transition-fast), transform var(--transition-fast);
}

.btn-primary {
  padding: 0.6rem 1.4rem;
  border-radius: 999px;
  background: var(--accent);
  color: #fff;
}

.btn-primary:hover {
  transform: translateY(-1px);
}

.btn-ghost {
  padding: 0.6rem 1.4rem;
  border-radius: 999px;
  background: transparent;
  border-color: var(--border);
  color: var(--ink);
}

.btn-ghost:hover {
  border-color: var(--accent);
}

.btn-chip {
  padding: 10px 20px;
  min-width: 220px;
  border-radius: 12px;
  background: var(--surface);
  border-color: var(--border);
  color: var(--ink);
  text-align: center;
}

.btn-chip:hover,
.btn-chip:focus-visible {
  border-color: var(--accent);
  background: var(--accent-soft);
}

.btn-floating {
  position: fixed;
  right: 1.5rem;
  bottom: 1.5rem;
  width: 3rem;
  height: 3rem;
  border-radius: 50%;
  background: var(--accent);
  color: #fff;
  font-size: var(--text-xl);
  box-shadow: var(--shadow);
  z-index: 20;
}

.icon-btn {
  width: 2.25rem;
  height: 2.25rem;
  border-radius: 50%;
  background: transparent;
  color: var(--ink);
  font-size: var(--text-lg);
}

.icon-btn:hover {
  background: var(--accent-soft);
}

.icon-btn[aria-pressed="true"] {
  color: var(--accent-warm);
}

/* === Cards === */
.card-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
  gap: 1.25rem;
}

.project-card,
.cert-card {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
  padding: 1.25rem;
  border-radius: 16px;
  background: var(--surface);
  border: 1px solid var(--border);
  box-shadow: var(--shadow);
  cursor: pointer;
  transition: transform var(--transition-fast), border-color var(--transition-fast);
}

.project-card:hover,
.cert-card:hover,
.project-card:focus-visible,
.cert-card:focus-visible {
  transform: translateY(-3px);
  border-color: var(--accent);
  outline: none;
}

.card-title {
  font-size: var(--text-lg);
  font-weight: 600;
}

.card-desc {
  color: var(--ink-muted);
  font-size: var(--text-sm);
}

.card-tags {
  display: flex;
  flex-wrap: wrap;
  gap: 0.4rem;
  margin-top: auto;
}

.tag {
  padding: 0.1rem 0.6rem;
  border-radius: 999px;
  background: var(--accent-soft);
  color: var(--accent);
  font-size: 0.75rem;
}

/* === Certifications === */
.cert-buttons {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 20px;
  margin-top: 10px;
}

/* === Skills === */
.skills {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
  gap: 1.25rem 2rem;
}

.skill-label {
  display: flex;
  justify-content: space-between;
  font-size: var(--text-sm);
  margin-bottom: 0.35rem;
}

.skill-value {
  color: var(--ink-muted);
}

.skill .bar {
  height: 8px;
  border-radius: 999px;
  background: var(--accent-soft);
  overflow: hidden;
}

.skill .bar > i {
  display: block;
  height: 100%;
  width: 0;
  border-radius: inherit;
  background: var(--accent);
  transition: width var(--transition-bar);
}

/* === Contact === */
.contact-form {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  max-width: 36rem;
}

.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.35rem;
}

.input-label {
  font-size: var(--text-sm);
  font-weight: 600;
}

.input-field {
  font: inherit;
  padding: 0.6rem 0.8rem;
  border-radius: 10px;
  border: 1px solid var(--border);
  background: var(--surface);
  color: var(--ink);
}

.input-field:focus {
  outline: none;
  border-color: var(--accent);
  box-shadow: 0 0 0 3px var(--accent-soft);
}

.textarea {
  resize: vertical;
}

.form-status {
  font-size: var(--text-sm);
  padding: 0.6rem 0.8rem;
  border-radius: 10px;
}

.form-status.ok {
  background: var(--accent-soft);
  color: var(--accent);
}

.form-status.missing {
  background: rgba(232, 131, 58, 0.14);
  color: var(--accent-warm);
}

/* === Modal === */
.modal-backdrop {
  position: fixed;
  inset: 0;
  z-index: 50;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 2rem;
  background: var(--backdrop);
  opacity: 0;
  visibility: hidden;
  transition: opacity var(--transition-modal), visibility var(--transition-modal);
}

.modal-backdrop.show {
  opacity: 1;
  visibility: visible;
}

.modal {
  width: min(720px, 100%);
  max-height: 90vh;
  overflow-y: auto;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
  padding: 1.5rem;
  border-radius: 16px;
  background: var(--surface);
  color: var(--ink);
  box-shadow: var(--shadow);
  transform: translateY(12px);
  transition: transform var(--transition-modal);
}

.modal-backdrop.show .modal {
  transform: none;
}

.modal-header {
  display: flex;
  align-items: flex-start;
  justify-content: space-between;
  gap: 1rem;
}

.modal-title {
  font-family: var(--font-display);
  font-size: var(--text-xl);
  font-weight: 600;
}

.modal-desc {
  color: var(--ink-muted);
}

.modal-tags {
  font-size: var(--text-sm);
  color: var(--accent);
}

.modal-image {
  width: 100%;
  border-radius: 8px;
}

.modal-live {
  align-self: flex-start;
  padding: 0.5rem 1.2rem;
  border-radius: 999px;
  border: 1px solid var(--accent);
}

/* === Footer === */
.site-footer {
  padding: 2rem 1.5rem;
  text-align: center;
  font-size: var(--text-sm);
  color: var(--ink-muted);
  border-top: 1px solid var(--border);
}

/* === Responsive === */
@media (max-width: 640px) {
  .hero-title {
    font-size: var(--text-2xl);
  }

  .nav-links {
    display: none;
  }

  .btn-chip {
    min-width: 100%;
  }
}
"#;
