//! Global CSS styles for Arcade Shelf.
//!
//! Neon pink on charcoal. Toast slide animations live here as static
//! keyframes.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* PINK (Primary, Accents) */
  --pink-primary: #ff1493;
  --pink-light: #ff69b4;
  --pink-glow: rgba(255, 20, 147, 0.5);
  --crimson: #dc143c;

  /* DARK (Backgrounds) */
  --dark-bg: #1a1a1a;
  --dark-card: #2a2a2a;
  --dark-border: #3a3a3a;

  /* TEXT */
  --text-primary: #ffffff;
  --text-secondary: rgba(255, 255, 255, 0.7);

  /* Typography */
  --font-sans: 'Segoe UI', 'Helvetica Neue', Arial, sans-serif;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
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
  font-family: var(--font-sans);
  background: var(--dark-bg);
  color: var(--text-primary);
  line-height: 1.6;
  min-height: 100vh;
}

/* === Layout === */
.shelf {
  max-width: 1100px;
  margin: 0 auto;
  padding: 2rem 1.5rem 4rem;
}

.shelf-header {
  text-align: center;
  margin-bottom: 2.5rem;
}

.page-title {
  font-size: 2.5rem;
  font-weight: 700;
  color: var(--pink-primary);
  text-shadow: 0 0 20px var(--pink-glow);
}

.tagline {
  color: var(--pink-light);
  margin-top: 0.5rem;
}

.section {
  margin-bottom: 3rem;
}

.section-header {
  font-size: 1.5rem;
  color: var(--pink-light);
  margin-bottom: 1.25rem;
  border-bottom: 2px solid var(--pink-primary);
  padding-bottom: 0.5rem;
}

/* === Game Grid === */
.games-grid {
  display: grid;
  grid-template-columns: repeat(auto-fill, minmax(280px, 1fr));
  gap: 1.5rem;
}

.games-empty {
  grid-column: 1 / -1;
  text-align: center;
  color: var(--pink-light);
  padding: 40px;
  font-size: 1.2rem;
}

/* === Game Card === */
.game-card {
  position: relative;
  background: var(--dark-card);
  border: 2px solid var(--dark-border);
  border-radius: 12px;
  overflow: hidden;
  cursor: pointer;
  transition: transform var(--transition-normal), border-color var(--transition-normal),
    box-shadow var(--transition-normal);
}

.game-card:hover {
  transform: translateY(-5px);
  border-color: var(--pink-primary);
  box-shadow: 0 10px 30px var(--pink-glow);
}

.game-image {
  display: block;
  width: 100%;
  height: 180px;
  object-fit: cover;
  background: var(--dark-bg);
}

.game-card h3 {
  padding: 1rem 1rem 0.5rem;
  font-size: 1.2rem;
  color: var(--text-primary);
  overflow-wrap: anywhere;
}

.game-link {
  display: inline-block;
  margin: 0 1rem 1rem;
  color: var(--pink-primary);
  text-decoration: none;
  font-weight: 600;
}

.game-link:hover {
  color: var(--pink-light);
}

/* === Icon / Delete Button === */
.icon-btn {
  background: transparent;
  border: none;
  color: var(--text-primary);
  cursor: pointer;
  font-size: 1.25rem;
  line-height: 1;
}

.delete-btn {
  position: absolute;
  top: 10px;
  right: 10px;
  width: 32px;
  height: 32px;
  border-radius: 50%;
  background: rgba(220, 20, 60, 0.85);
  z-index: 2;
  opacity: 0;
  transition: opacity var(--transition-fast), transform var(--transition-fast);
}

.game-card:hover .delete-btn {
  opacity: 1;
}

.delete-btn:hover {
  background: var(--crimson);
  transform: scale(1.1);
}

/* === Buttons === */
.btn-primary {
  background: linear-gradient(135deg, var(--pink-primary), var(--pink-light));
  color: var(--text-primary);
  border: none;
  border-radius: 8px;
  padding: 0.75rem 1.75rem;
  font-weight: 600;
  font-size: 1rem;
  cursor: pointer;
  transition: box-shadow var(--transition-normal), transform var(--transition-fast);
}

.btn-primary:hover {
  box-shadow: 0 5px 20px var(--pink-glow);
  transform: translateY(-2px);
}

/* === Form === */
.add-game-form {
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
  max-width: 560px;
}

.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.4rem;
}

.input-label {
  color: var(--pink-light);
  font-weight: 600;
}

.input-hint {
  color: var(--text-secondary);
  font-weight: 400;
}

.input-field {
  background: var(--dark-card);
  border: 2px solid var(--dark-border);
  border-radius: 8px;
  color: var(--text-primary);
  padding: 0.75rem 1rem;
  font-size: 1rem;
  transition: border-color var(--transition-fast), box-shadow var(--transition-fast);
}

.input-field:focus {
  outline: none;
  border-color: var(--pink-primary);
  box-shadow: 0 0 10px var(--pink-glow);
}

/* === Notifications === */
.notification {
  position: fixed;
  top: 100px;
  right: 20px;
  color: white;
  padding: 15px 25px;
  border-radius: 10px;
  box-shadow: 0 5px 20px var(--pink-glow);
  z-index: 1000;
  font-weight: 600;
  animation: slideInRight 0.5s ease;
}

.notification.leaving {
  animation: slideOutRight 0.5s ease forwards;
}

@keyframes slideInRight {
  from {
    transform: translateX(400px);
    opacity: 0;
  }
  to {
    transform: translateX(0);
    opacity: 1;
  }
}

@keyframes slideOutRight {
  from {
    transform: translateX(0);
    opacity: 1;
  }
  to {
    transform: translateX(400px);
    opacity: 0;
  }
}
"#;
