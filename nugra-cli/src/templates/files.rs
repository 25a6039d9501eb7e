//! Project starter file templates
//!
//! Rendered with Handlebars against `project_name` and `frontend` (the
//! flavor label). Bodies contain no other `{{` sequences.

/// README.md with the flavor marker
pub const README_MD: &str = "# {{project_name}}\n\nFrontend: {{frontend}}\nBackend: NestJS\n";

/// Root package.json declaring the npm workspaces
pub const ROOT_PACKAGE_JSON: &str = r#"{
  "name": "{{project_name}}",
  "private": true,
  "workspaces": [
    "apps/*",
    "packages/*"
  ]
}
"#;

/// .gitignore for new projects
pub const GITIGNORE: &str = r"node_modules/
dist/
.angular/
.env
*.log
";

/// .eslintrc.json copied to both apps
pub const ESLINTRC_JSON: &str = r#"{
  "root": true,
  "parser": "@typescript-eslint/parser",
  "plugins": ["@typescript-eslint", "prettier"],
  "extends": [
    "eslint:recommended",
    "plugin:@typescript-eslint/recommended",
    "prettier"
  ],
  "rules": {
    "prettier/prettier": "error"
  }
}
"#;

/// .prettierrc copied to both apps
pub const PRETTIERRC: &str = r#"{
  "singleQuote": true,
  "trailingComma": "all",
  "printWidth": 100
}
"#;

/// Tailwind configuration
pub const TAILWIND_CONFIG_JS: &str = r"/** @type {import('tailwindcss').Config} */
module.exports = {
  content: ['./index.html', './src/**/*.{html,ts,tsx,vue}'],
  theme: {
    extend: {},
  },
  plugins: [],
};
";

/// PostCSS configuration
pub const POSTCSS_CONFIG_JS: &str = r"module.exports = {
  plugins: {
    tailwindcss: {},
    autoprefixer: {},
  },
};
";

/// Stylesheet with the Tailwind directives (`index.css`, or `styles.css` for Angular)
pub const TAILWIND_CSS: &str = r"@tailwind base;
@tailwind components;
@tailwind utilities;
";

// Backend (NestJS)

/// Backend package.json
pub const BACKEND_PACKAGE_JSON: &str = r#"{
  "name": "{{project_name}}-backend",
  "version": "0.1.0",
  "private": true,
  "scripts": {
    "build": "nest build",
    "start": "nest start",
    "start:dev": "nest start --watch"
  },
  "dependencies": {
    "@nestjs/common": "^10.0.0",
    "@nestjs/core": "^10.0.0",
    "@nestjs/platform-express": "^10.0.0",
    "@nestjs/swagger": "^7.0.0",
    "@nestjs/typeorm": "^10.0.0",
    "dotenv": "^16.0.0",
    "pg": "^8.11.0",
    "reflect-metadata": "^0.2.0",
    "rxjs": "^7.8.0",
    "typeorm": "^0.3.0"
  },
  "devDependencies": {
    "@nestjs/cli": "^10.0.0",
    "typescript": "^5.0.0"
  }
}
"#;

/// Backend tsconfig.json
pub const BACKEND_TSCONFIG_JSON: &str = r#"{
  "compilerOptions": {
    "module": "commonjs",
    "target": "ES2021",
    "outDir": "./dist",
    "baseUrl": "./",
    "declaration": true,
    "emitDecoratorMetadata": true,
    "experimentalDecorators": true,
    "strictPropertyInitialization": false,
    "sourceMap": true,
    "skipLibCheck": true
  }
}
"#;

/// Nest CLI configuration
pub const BACKEND_NEST_CLI_JSON: &str = r#"{
  "collection": "@nestjs/schematics",
  "sourceRoot": "src"
}
"#;

/// Backend entry point with CORS and Swagger setup
pub const BACKEND_MAIN_TS: &str = r"import { NestFactory } from '@nestjs/core';
import { DocumentBuilder, SwaggerModule } from '@nestjs/swagger';
import { AppModule } from './app.module';

async function bootstrap() {
  const app = await NestFactory.create(AppModule);

  app.enableCors({
    origin: '*',
    credentials: true,
    allowedHeaders: ['Content-Type', 'Authorization'],
    methods: ['GET', 'POST', 'PUT', 'DELETE', 'OPTIONS'],
  });

  const config = new DocumentBuilder()
    .setTitle('NugraJS API')
    .setDescription('API documentation powered by Swagger')
    .setVersion('1.0')
    .build();
  const document = SwaggerModule.createDocument(app, config);
  SwaggerModule.setup('api-docs', app, document);

  await app.listen(3000);
}
bootstrap();
";

/// Root module entity modules get registered in
pub const BACKEND_APP_MODULE_TS: &str = r"import { Module } from '@nestjs/common';
import { TypeOrmModule } from '@nestjs/typeorm';
import dataSource from './ormconfig';

@Module({
  imports: [
    TypeOrmModule.forRoot(dataSource.options),
  ],
  controllers: [],
  providers: [],
})
export class AppModule {}
";

/// TypeORM data source reading `DB_*` variables
pub const BACKEND_ORMCONFIG_TS: &str = r"import { DataSource } from 'typeorm';
import * as dotenv from 'dotenv';
dotenv.config();

export default new DataSource({
  type: 'postgres',
  host: process.env.DB_HOST,
  port: Number(process.env.DB_PORT),
  username: process.env.DB_USER,
  password: process.env.DB_PASS,
  database: process.env.DB_NAME,
  entities: [__dirname + '/modules/**/*.model.{ts,js}'],
  synchronize: true,
});
";

/// Example database environment
pub const BACKEND_ENV_EXAMPLE: &str = r"DB_HOST=localhost
DB_PORT=5432
DB_USER=postgres
DB_PASS=postgres
DB_NAME={{project_name}}
";

// Frontend: React

/// React package.json
pub const REACT_PACKAGE_JSON: &str = r#"{
  "name": "{{project_name}}-frontend",
  "version": "0.1.0",
  "private": true,
  "type": "module",
  "scripts": {
    "dev": "vite",
    "build": "vite build"
  },
  "dependencies": {
    "react": "^18.3.0",
    "react-dom": "^18.3.0"
  },
  "devDependencies": {
    "@vitejs/plugin-react": "^4.3.0",
    "typescript": "^5.0.0",
    "vite": "^5.4.0"
  }
}
"#;

/// React index.html
pub const REACT_INDEX_HTML: &str = r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>{{project_name}}</title>
  </head>
  <body>
    <div id="root"></div>
    <script type="module" src="/src/main.tsx"></script>
  </body>
</html>
"#;

/// React Vite configuration
pub const REACT_VITE_CONFIG_TS: &str = r"import { defineConfig } from 'vite';
import react from '@vitejs/plugin-react';

export default defineConfig({
  plugins: [react()],
});
";

/// React entry point
pub const REACT_MAIN_TSX: &str = r"import React from 'react';
import ReactDOM from 'react-dom/client';
import App from './App';
import '../index.css';

ReactDOM.createRoot(document.getElementById('root')!).render(
  <React.StrictMode>
    <App />
  </React.StrictMode>,
);
";

/// React root component
pub const REACT_APP_TSX: &str = r#"export default function App() {
  return (
    <main className="p-8">
      <h1 className="text-3xl font-bold">{{project_name}}</h1>
      <p className="mt-2">React + NestJS, scaffolded by nugra.</p>
    </main>
  );
}
"#;

// Frontend: Vue

/// Vue package.json
pub const VUE_PACKAGE_JSON: &str = r#"{
  "name": "{{project_name}}-frontend",
  "version": "0.1.0",
  "private": true,
  "type": "module",
  "scripts": {
    "dev": "vite",
    "build": "vite build"
  },
  "dependencies": {
    "vue": "^3.4.0"
  },
  "devDependencies": {
    "@vitejs/plugin-vue": "^5.1.0",
    "typescript": "^5.0.0",
    "vite": "^5.4.0"
  }
}
"#;

/// Vue index.html
pub const VUE_INDEX_HTML: &str = r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>{{project_name}}</title>
  </head>
  <body>
    <div id="app"></div>
    <script type="module" src="/src/main.ts"></script>
  </body>
</html>
"#;

/// Vue Vite configuration
pub const VUE_VITE_CONFIG_TS: &str = r"import { defineConfig } from 'vite';
import vue from '@vitejs/plugin-vue';

export default defineConfig({
  plugins: [vue()],
});
";

/// Vue entry point
pub const VUE_MAIN_TS: &str = r"import { createApp } from 'vue';
import App from './App.vue';
import '../index.css';

createApp(App).mount('#app');
";

/// Vue root component
pub const VUE_APP_VUE: &str = r#"<template>
  <main class="p-8">
    <h1 class="text-3xl font-bold">{{project_name}}</h1>
    <p class="mt-2">Vue + NestJS, scaffolded by nugra.</p>
  </main>
</template>
"#;

// Frontend: Angular

/// Angular package.json
pub const ANGULAR_PACKAGE_JSON: &str = r#"{
  "name": "{{project_name}}-frontend",
  "version": "0.1.0",
  "private": true,
  "scripts": {
    "start": "ng serve",
    "build": "ng build"
  },
  "dependencies": {
    "@angular/common": "^18.0.0",
    "@angular/core": "^18.0.0",
    "@angular/forms": "^18.0.0",
    "@angular/platform-browser": "^18.0.0",
    "@angular/platform-browser-dynamic": "^18.0.0",
    "rxjs": "^7.8.0",
    "zone.js": "^0.14.0"
  },
  "devDependencies": {
    "@angular-devkit/build-angular": "^18.0.0",
    "@angular/cli": "^18.0.0",
    "@angular/compiler-cli": "^18.0.0",
    "typescript": "^5.4.0"
  }
}
"#;

/// Angular workspace configuration
pub const ANGULAR_JSON: &str = r#"{
  "$schema": "./node_modules/@angular/cli/lib/config/schema.json",
  "version": 1,
  "projects": {
    "{{project_name}}": {
      "projectType": "application",
      "root": "",
      "sourceRoot": "src",
      "architect": {
        "build": {
          "builder": "@angular-devkit/build-angular:application",
          "options": {
            "outputPath": "dist",
            "index": "src/index.html",
            "browser": "src/main.ts",
            "tsConfig": "tsconfig.json",
            "styles": ["styles.css"]
          }
        },
        "serve": {
          "builder": "@angular-devkit/build-angular:dev-server",
          "options": {
            "buildTarget": "{{project_name}}:build"
          }
        }
      }
    }
  }
}
"#;

/// Angular tsconfig.json
pub const ANGULAR_TSCONFIG_JSON: &str = r#"{
  "compilerOptions": {
    "target": "ES2022",
    "module": "ES2022",
    "moduleResolution": "node",
    "experimentalDecorators": true,
    "strict": true,
    "skipLibCheck": true
  },
  "files": ["src/main.ts"]
}
"#;

/// Angular index.html
pub const ANGULAR_INDEX_HTML: &str = r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>{{project_name}}</title>
  </head>
  <body>
    <app-root></app-root>
  </body>
</html>
"#;

/// Angular bootstrap
pub const ANGULAR_MAIN_TS: &str = r"import 'zone.js';
import { bootstrapApplication } from '@angular/platform-browser';
import { provideHttpClient } from '@angular/common/http';
import { AppComponent } from './app/app.component';

bootstrapApplication(AppComponent, {
  providers: [provideHttpClient()],
}).catch((err) => console.error(err));
";

/// Angular root component
pub const ANGULAR_APP_COMPONENT_TS: &str = r"import { Component } from '@angular/core';

@Component({
  selector: 'app-root',
  standalone: true,
  template: `
    <main class='p-8'>
      <h1 class='text-3xl font-bold'>{{project_name}}</h1>
      <p class='mt-2'>Angular + NestJS, scaffolded by nugra.</p>
    </main>
  `,
})
export class AppComponent {}
";
