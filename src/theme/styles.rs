//! Global CSS styles for detectview.
//!
//! Dark terminal palette: void backgrounds, moss for state, cyan for
//! interactive elements.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* VOID (Backgrounds) */
  --void-black: #0a0a0a;
  --void-lighter: #0a0e0f;
  --void-border: #1a1a1a;

  /* MOSS GREEN (Status) */
  --moss: #5a7a5a;
  --moss-glow: #7cb87c;

  /* CYAN (Links, Input) */
  --cyan: #00d4aa;
  --cyan-glow: rgba(0, 212, 170, 0.3);

  /* GOLD (Titles) */
  --gold: #d4af37;
  --gold-glow: rgba(212, 175, 55, 0.3);

  /* TEXT */
  --text-primary: #f5f5f5;
  --text-secondary: rgba(245, 245, 245, 0.7);
  --text-muted: rgba(245, 245, 245, 0.5);

  /* SEMANTIC */
  --danger: #ff3366;

  /* Typography */
  --font-serif: 'Cormorant Garamond', Georgia, serif;
  --font-mono: 'JetBrains Mono', 'SF Mono', 'Consolas', monospace;

  --text-sm: 0.875rem;
  --text-base: 1rem;
  --text-xl: 1.5rem;
  --text-3xl: 3rem;
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

body {
  font-family: var(--font-mono);
  background: var(--void-black);
  color: var(--text-primary);
  line-height: 1.7;
  min-height: 100vh;
}

/* === Typography === */
.page-title {
  font-family: var(--font-serif);
  font-size: var(--text-3xl);
  font-weight: 400;
  color: var(--gold);
  text-shadow: 0 0 30px var(--gold-glow);
  letter-spacing: 0.1em;
}

.section-header {
  font-family: var(--font-serif);
  font-size: var(--text-xl);
  font-weight: 400;
  font-style: italic;
  color: var(--gold);
  margin-bottom: 0.75rem;
}

.tagline {
  font-size: var(--text-sm);
  color: var(--text-muted);
}

/* === Layout === */
.detect {
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
  padding: 2rem;
  max-width: 1100px;
  margin: 0 auto;
}

.results {
  display: grid;
  grid-template-columns: 2fr 1fr;
  gap: 1.5rem;
}

/* === Drop Zone === */
.dropzone {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.5rem;
  padding: 2.5rem 1rem;
  border: 2px dashed var(--moss);
  border-radius: 8px;
  background: var(--void-lighter);
  transition: all 0.3s ease;
}

.dropzone.hover {
  border-color: var(--cyan);
  background: rgba(0, 212, 170, 0.06);
  box-shadow: 0 0 20px var(--cyan-glow);
}

.dropzone__hint {
  color: var(--text-primary);
}

.dropzone__or,
.dropzone__types {
  font-size: var(--text-sm);
  color: var(--text-muted);
}

/* === Buttons === */
.btn-primary {
  padding: 0.75rem 2rem;
  background: transparent;
  border: 1px solid var(--moss);
  border-radius: 4px;
  color: var(--text-primary);
  font-family: var(--font-mono);
  font-size: var(--text-base);
  cursor: pointer;
  transition: all 0.3s ease;
}

.btn-primary:hover {
  border-color: var(--moss-glow);
  box-shadow: 0 0 20px rgba(124, 184, 124, 0.3);
  transform: translateY(-1px);
}

/* === Status === */
.status {
  font-size: var(--text-sm);
  color: var(--moss-glow);
}

.status--busy {
  color: var(--cyan);
  animation: pulse 2s ease-in-out infinite;
}

.status--error {
  padding: 0.5rem;
  background: rgba(255, 51, 102, 0.1);
  border: 1px solid rgba(255, 51, 102, 0.3);
  border-radius: 4px;
  color: var(--danger);
}

@keyframes pulse {
  0%, 100% { opacity: 1; }
  50% { opacity: 0.6; }
}

/* === Results === */
.result-image {
  width: 100%;
  border: 1px solid var(--void-border);
  border-radius: 4px;
}

.meta__list {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: 0.25rem;
}

.meta__item {
  font-size: var(--text-sm);
  color: var(--text-secondary);
  border-left: 2px solid var(--cyan);
  padding-left: 0.5rem;
}

.meta__empty {
  font-size: var(--text-sm);
  color: var(--text-muted);
  font-style: italic;
}
"#;
