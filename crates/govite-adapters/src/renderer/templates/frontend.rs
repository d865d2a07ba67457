//! Frontend skeleton: Vite + React + Tailwind with a starter dashboard page.

pub const PACKAGE_JSON: &str = r##"{
  "name": "{{NAME}}",
  "version": "1.0.0",
  "description": "{{DESCRIPTION}}",
  "author": "{{AUTHOR}}",
  "type": "module",
  "scripts": {
    "dev": "vite",
    "build": "vite build",
    "preview": "vite preview",
    "lint": "eslint . --ext js,jsx,ts,tsx",
    "format": "prettier --write \"src/**/*.{js,jsx,ts,tsx,json,css,md}\""
  },
  "dependencies": {
    "react": "^18.2.0",
    "react-dom": "^18.2.0",
    "lucide-react": "^0.294.0",
    "axios": "^1.6.2"
  },
  "devDependencies": {
    "@types/react": "^18.2.43",
    "@types/react-dom": "^18.2.17",
    "@vitejs/plugin-react": "^4.2.1",
    "autoprefixer": "^10.4.16",
    "eslint": "^8.55.0",
    "eslint-plugin-react": "^7.33.2",
    "eslint-plugin-react-hooks": "^4.6.0",
    "eslint-plugin-react-refresh": "^0.4.5",
    "postcss": "^8.4.32",
    "prettier": "^3.1.1",
    "tailwindcss": "^3.3.6",
    "vite": "^5.0.8"
  }
}
"##;

pub const VITE_CONFIG: &str = r##"import { defineConfig } from 'vite'
import react from '@vitejs/plugin-react'
import path from 'path'

export default defineConfig({
  plugins: [react()],
  resolve: {
    alias: {
      '@': path.resolve(__dirname, './src'),
    },
  },
  server: {
    port: {{PORT}},
    host: true,
    proxy: {
      '/api': {
        target: 'http://localhost:{{BACKEND_PORT}}',
        changeOrigin: true,
        secure: false,
      },
    },
  },
  build: {
    outDir: 'dist',
    sourcemap: true,
  },
})
"##;

pub const TAILWIND_CONFIG: &str = r##"/** @type {import('tailwindcss').Config} */
export default {
  content: [
    "./index.html",
    "./src/**/*.{js,ts,jsx,tsx}",
  ],
  theme: {
    extend: {
      colors: {
        brand: {
          50: '#ecfeff',
          100: '#cffafe',
          200: '#a5f3fc',
          300: '#67e8f9',
          400: '#22d3ee',
          500: '#06b6d4',
          600: '#0891b2',
          700: '#0e7490',
          800: '#155e75',
          900: '#164e63',
        },
      },
    },
  },
  plugins: [],
}
"##;

pub const POSTCSS_CONFIG: &str = r##"export default {
  plugins: {
    tailwindcss: {},
    autoprefixer: {},
  },
}
"##;

pub const INDEX_HTML: &str = r##"<!doctype html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <link rel="icon" type="image/svg+xml" href="/vite.svg" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>{{NAME}}</title>
  </head>
  <body>
    <div id="root"></div>
    <script type="module" src="/src/main.tsx"></script>
  </body>
</html>
"##;

pub const MAIN_TSX: &str = r##"import React from 'react'
import ReactDOM from 'react-dom/client'
import App from './App.tsx'
import './index.css'

ReactDOM.createRoot(document.getElementById('root')!).render(
  <React.StrictMode>
    <App />
  </React.StrictMode>,
)
"##;

pub const APP_TSX: &str = r##"import React, { useState, useEffect } from 'react';
import { Play, Settings } from 'lucide-react';

function App() {
  const [status, setStatus] = useState<string>('idle');
  const [items, setItems] = useState<any[]>([]);

  useEffect(() => {
    fetchItems();
  }, []);

  const fetchItems = async () => {
    try {
      const response = await fetch('/api/v1/items');
      const data = await response.json();
      setItems(data.items || []);
    } catch (error) {
      console.error('Failed to fetch items:', error);
    }
  };

  return (
    <div className="min-h-screen bg-gradient-to-br from-slate-900 via-brand-900 to-slate-900 text-white p-6">
      <div className="max-w-7xl mx-auto">
        <div className="text-center mb-8">
          <h1 className="text-5xl font-bold mb-2 bg-gradient-to-r from-brand-400 to-blue-400 bg-clip-text text-transparent">
            {{NAME}}
          </h1>
          <p className="text-lg text-gray-300">{{DESCRIPTION}}</p>
        </div>

        <div className="bg-slate-800/50 backdrop-blur-sm rounded-xl p-6 mb-8 border border-brand-500/30">
          <div className="flex items-center justify-between mb-4">
            <h2 className="text-2xl font-bold">Dashboard</h2>
            <span className="px-3 py-1 bg-green-600/30 text-green-300 rounded-full text-sm">
              {status}
            </span>
          </div>

          <div className="flex gap-3">
            <button
              onClick={() => setStatus('running')}
              className="flex items-center gap-2 bg-gradient-to-r from-brand-600 to-blue-600 px-6 py-3 rounded-lg font-semibold hover:from-brand-500 hover:to-blue-500 transition-all"
            >
              <Play className="w-5 h-5" />
              Start
            </button>
            <button className="flex items-center gap-2 bg-slate-700 px-6 py-3 rounded-lg font-semibold hover:bg-slate-600 transition-all">
              <Settings className="w-5 h-5" />
              Settings
            </button>
          </div>
        </div>

        <div className="bg-slate-800/50 backdrop-blur-sm rounded-xl p-6 border border-brand-500/30">
          <h3 className="text-xl font-bold mb-4">Items</h3>
          {items.length === 0 ? (
            <p className="text-gray-400">No items yet</p>
          ) : (
            <ul className="space-y-2">
              {items.map((item, idx) => (
                <li key={idx} className="p-3 bg-slate-700/50 rounded-lg">
                  {JSON.stringify(item)}
                </li>
              ))}
            </ul>
          )}
        </div>
      </div>
    </div>
  );
}

export default App;
"##;

pub const INDEX_CSS: &str = r##"@tailwind base;
@tailwind components;
@tailwind utilities;
"##;

pub const ESLINTRC: &str = r##"module.exports = {
  root: true,
  env: { browser: true, es2020: true },
  extends: [
    'eslint:recommended',
    'plugin:react/recommended',
    'plugin:react/jsx-runtime',
    'plugin:react-hooks/recommended',
  ],
  ignorePatterns: ['dist', '.eslintrc.cjs'],
  parserOptions: { ecmaVersion: 'latest', sourceType: 'module' },
  settings: { react: { version: '18.2' } },
  plugins: ['react-refresh'],
  rules: {
    'react-refresh/only-export-components': [
      'warn',
      { allowConstantExport: true },
    ],
    'react/prop-types': 'off',
  },
}
"##;

pub const PRETTIERRC: &str = r##"{
  "semi": true,
  "trailingComma": "es5",
  "singleQuote": true,
  "printWidth": 100,
  "tabWidth": 2,
  "useTabs": false
}
"##;
