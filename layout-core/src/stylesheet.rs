/// Id of the `<style>` element carrying [`STYLESHEET`].
pub const STYLESHEET_ID: &str = "hr-responsive-styles";

/// Every rule the controller relies on. Behaviour is switched purely by the
/// classes and attributes it mutates, never by page selectors, so overriding
/// `selectors.*` cannot leave a rule without its element. Layout rules tied
/// to the size buckets key off the `<body>` marker so they follow the
/// configured breakpoints.
pub const STYLESHEET: &str = r#"
.mobile-menu-toggle {
  position: fixed;
  top: 20px;
  left: 20px;
  z-index: 1001;
  display: none;
  align-items: center;
  justify-content: center;
  width: 50px;
  height: 50px;
  border: none;
  border-radius: 12px;
  background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
  color: #fff;
  font-size: 18px;
  cursor: pointer;
  box-shadow: 0 10px 30px rgba(0, 0, 0, 0.2);
  transition: all 0.3s cubic-bezier(0.4, 0, 0.2, 1);
}

.mobile-overlay {
  position: fixed;
  top: 0;
  left: 0;
  width: 100%;
  height: 100%;
  z-index: 999;
  background: rgba(0, 0, 0, 0.5);
  opacity: 0;
  visibility: hidden;
  backdrop-filter: blur(5px);
  transition: all 0.3s ease;
}

body.mobile .responsive-panel {
  transform: translateX(-100%);
  transition: transform 0.3s cubic-bezier(0.4, 0, 0.2, 1);
  z-index: 1000;
}
body.mobile .responsive-panel.mobile-open { transform: translateX(0); }
body.mobile .mobile-menu-toggle { display: flex; }
body.mobile .mobile-overlay.active { opacity: 1; visibility: visible; }
body.mobile.menu-open { overflow: hidden; }
body.mobile .main-content {
  margin-left: 0 !important;
  padding: 80px 15px 20px 15px;
}
body.mobile .slide-in { animation: slideInLeft 0.3s ease-out both; }

@keyframes slideInLeft {
  from { opacity: 0; transform: translateX(-20px); }
  to { opacity: 1; transform: translateX(0); }
}

body.mobile .btn { min-height: 44px; min-width: 44px; }
body.mobile input,
body.mobile select,
body.mobile textarea { font-size: 16px; }
body.tablet .card { margin-bottom: 20px; }

@media (max-width: 480px) {
  .content-area { padding: 15px !important; }
  .card { margin-bottom: 15px; }
  .card-body { padding: 15px !important; }
  .btn { padding: 10px 20px; font-size: 14px; }
}

.table-responsive {
  overflow-x: auto;
  -webkit-overflow-scrolling: touch;
  border-radius: 15px;
  box-shadow: 0 10px 30px rgba(0, 0, 0, 0.1);
}

body.mobile .table-responsive table,
body.mobile .table-responsive thead,
body.mobile .table-responsive tbody,
body.mobile .table-responsive th,
body.mobile .table-responsive td,
body.mobile .table-responsive tr { display: block; }
body.mobile .table-responsive thead tr {
  position: absolute;
  top: -9999px;
  left: -9999px;
}
body.mobile .table-responsive tr {
  margin-bottom: 15px;
  padding: 15px;
  border: 1px solid rgba(0, 0, 0, 0.1);
  border-radius: 12px;
  background: #fff;
  box-shadow: 0 5px 15px rgba(0, 0, 0, 0.05);
}
body.mobile .table-responsive td {
  position: relative;
  padding: 8px 0 8px 50% !important;
  border: none;
  text-align: right;
}
body.mobile .table-responsive td[data-label]::before {
  content: attr(data-label) ": ";
  position: absolute;
  left: 0;
  width: 45%;
  padding-right: 10px;
  white-space: nowrap;
  font-weight: 600;
  color: #2d3436;
  text-align: left;
}

.touch-device .touch-active { transform: scale(0.98); opacity: 0.8; }
.touch-device button,
.touch-device .btn { min-height: 44px; min-width: 44px; }
.touch-device .nav-link { min-height: 44px; padding: 12px 20px; }

.reveal-pending { transition: all 0.6s cubic-bezier(0.4, 0, 0.2, 1); }
.reveal-pending:not(.animate-in) {
  opacity: 0;
  transform: translateY(20px);
}
.animate-in {
  opacity: 1 !important;
  transform: translateY(0) !important;
}
"#;
